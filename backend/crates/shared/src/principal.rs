//! Authenticated caller
//!
//! The auth middleware resolves a bearer token into a [`Principal`] and stores
//! it in the request extensions. Feature crates read it back to make role and
//! ownership decisions without depending on the auth crate.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::app_error::AppError;
use crate::id::UserId;

/// Account type, fixed at signup
///
/// Serialized in upper case (`"BUYER"`, `"REALTOR"`, `"ADMIN"`), which is also
/// the form used in URL paths and in product-key plaintexts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(i16)]
pub enum UserType {
    Buyer = 0,
    Realtor = 1,
    Admin = 2,
}

impl UserType {
    pub const ALL: [UserType; 3] = [UserType::Buyer, UserType::Realtor, UserType::Admin];

    /// Storage id
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            UserType::Buyer => "BUYER",
            UserType::Realtor => "REALTOR",
            UserType::Admin => "ADMIN",
        }
    }

    /// Privileged types must present a product key at signup
    #[inline]
    pub const fn requires_product_key(&self) -> bool {
        !matches!(self, UserType::Buyer)
    }

    pub fn from_id(id: i16) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for UserType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.code() == s)
            .ok_or_else(|| AppError::bad_request(format!("Unknown user type: {s}")))
    }
}

/// Caller identity attached to authenticated requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    pub user_id: UserId,
    pub user_type: UserType,
}

impl Principal {
    pub fn new(user_id: UserId, user_type: UserType) -> Self {
        Self { user_id, user_type }
    }

    pub fn is(&self, user_type: UserType) -> bool {
        self.user_type == user_type
    }

    pub fn is_admin(&self) -> bool {
        self.is(UserType::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_type_codes() {
        assert_eq!(UserType::Buyer.to_string(), "BUYER");
        assert_eq!(UserType::Realtor.to_string(), "REALTOR");
        assert_eq!(UserType::Admin.to_string(), "ADMIN");
    }

    #[test]
    fn test_user_type_from_id() {
        for t in UserType::ALL {
            assert_eq!(UserType::from_id(t.id()), Some(t));
        }
        assert_eq!(UserType::from_id(7), None);
    }

    #[test]
    fn test_user_type_parse() {
        assert_eq!("REALTOR".parse::<UserType>().unwrap(), UserType::Realtor);
        assert!("realtor".parse::<UserType>().is_err());
        assert!("LANDLORD".parse::<UserType>().is_err());
    }

    #[test]
    fn test_user_type_serde() {
        let json = serde_json::to_string(&UserType::Admin).unwrap();
        assert_eq!(json, r#""ADMIN""#);
        let parsed: UserType = serde_json::from_str(r#""BUYER""#).unwrap();
        assert_eq!(parsed, UserType::Buyer);
        assert!(serde_json::from_str::<UserType>(r#""GUEST""#).is_err());
    }

    #[test]
    fn test_product_key_requirement() {
        assert!(!UserType::Buyer.requires_product_key());
        assert!(UserType::Realtor.requires_product_key());
        assert!(UserType::Admin.requires_product_key());
    }
}
