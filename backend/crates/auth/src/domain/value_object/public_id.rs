//! PublicId Value Object
//!
//! Compact URL-safe identifier (21-char nanoid) exposed in API responses in
//! place of the internal UUID.
//!
//! ```rust
//! use auth::domain::value_object::public_id::PublicId;
//!
//! let public_id = PublicId::new();
//! assert_eq!(public_id.as_str().len(), 21);
//! ```

use std::str::FromStr;

use kernel::error::app_error::{AppError, AppResult};
use nid::Nanoid;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicId(Nanoid);

impl PublicId {
    #[inline]
    pub fn new() -> Self {
        Self(Nanoid::new())
    }

    pub fn parse_str(s: &str) -> AppResult<Self> {
        Nanoid::from_str(s)
            .map(PublicId)
            .map_err(|e| AppError::bad_request(format!("Invalid public id: {}", e)))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl FromStr for PublicId {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        PublicId::parse_str(s)
    }
}

impl Default for PublicId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PublicId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_id_unique() {
        assert_ne!(PublicId::new(), PublicId::new());
    }

    #[test]
    fn test_public_id_parse() {
        let id_str = "0123456789abcdefghi01";
        let public_id: PublicId = id_str.parse().unwrap();
        assert_eq!(public_id.as_str(), id_str);
        assert_eq!(public_id.to_string(), id_str);
    }

    #[test]
    fn test_public_id_parse_invalid() {
        assert!(PublicId::parse_str("invalid_id!@#").is_err());
        assert!(PublicId::parse_str("short").is_err());
    }
}
