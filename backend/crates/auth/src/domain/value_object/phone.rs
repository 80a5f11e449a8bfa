//! Phone Value Object
//!
//! Contact number shown to buyers who inquire about a listing. Formatting is
//! kept as entered; only the shape is checked.

use kernel::error::app_error::{AppError, AppResult};
use std::fmt;

const MIN_DIGITS: usize = 7;
/// E.164 upper bound
const MAX_DIGITS: usize = 15;
const MAX_CHARS: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phone(String);

impl Phone {
    pub fn new(raw: impl AsRef<str>) -> AppResult<Self> {
        let phone = raw.as_ref().trim();

        let allowed = |c: char| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')' | '.');
        let body = phone.strip_prefix('+').unwrap_or(phone);

        if body.is_empty() || phone.len() > MAX_CHARS || !body.chars().all(allowed) {
            return Err(Self::invalid());
        }

        let digits = body.chars().filter(char::is_ascii_digit).count();
        if !(MIN_DIGITS..=MAX_DIGITS).contains(&digits) {
            return Err(Self::invalid());
        }

        Ok(Self(phone.to_string()))
    }

    fn invalid() -> AppError {
        AppError::bad_request("Invalid phone number")
            .with_action("Use digits with optional +, spaces, dashes or parentheses, e.g. (555) 555-5555")
    }

    pub fn from_db(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        for raw in ["(555) 555-5555", "555-555-5555", "+81 90 1234 5678", "5555555"] {
            assert!(Phone::new(raw).is_ok(), "{raw} should be accepted");
        }
    }

    #[test]
    fn test_phone_invalid() {
        for raw in ["", "+", "555-CALL-NOW", "12345", "+1 234 567 890 123 456", "++15555555555"] {
            assert!(Phone::new(raw).is_err(), "{raw} should be rejected");
        }
    }

    #[test]
    fn test_phone_trimmed() {
        assert_eq!(Phone::new(" 555-555-5555 ").unwrap().as_str(), "555-555-5555");
    }
}
