//! Person Name Value Object
//!
//! Display name given at signup. Whitespace is trimmed and inner runs are
//! collapsed; there is no uniqueness requirement.

use kernel::error::app_error::{AppError, AppResult};
use std::fmt;

const NAME_MAX_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonName(String);

impl PersonName {
    pub fn new(raw: impl AsRef<str>) -> AppResult<Self> {
        let collapsed = raw.as_ref().split_whitespace().collect::<Vec<_>>().join(" ");

        if collapsed.is_empty() {
            return Err(AppError::bad_request("Name cannot be empty"));
        }

        if collapsed.chars().count() > NAME_MAX_CHARS {
            return Err(AppError::bad_request(format!(
                "Name must be at most {} characters",
                NAME_MAX_CHARS
            )));
        }

        if collapsed.chars().any(char::is_control) {
            return Err(AppError::bad_request("Name contains invalid characters"));
        }

        Ok(Self(collapsed))
    }

    pub fn from_db(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_collapses_whitespace() {
        let name = PersonName::new("  Jane   van  Doe ").unwrap();
        assert_eq!(name.as_str(), "Jane van Doe");
    }

    #[test]
    fn test_name_invalid() {
        assert!(PersonName::new("").is_err());
        assert!(PersonName::new(" \t ").is_err());
        assert!(PersonName::new("x".repeat(NAME_MAX_CHARS + 1)).is_err());
        assert!(PersonName::new("Bad\u{0}Name").is_err());
    }

    #[test]
    fn test_name_unicode_length() {
        assert!(PersonName::new("山".repeat(NAME_MAX_CHARS)).is_ok());
    }
}
