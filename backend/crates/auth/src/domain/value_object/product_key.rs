//! Product Key Value Object
//!
//! A product key is an Argon2id PHC hash of `<email>-<USERTYPE>-<secret>`.
//! Keys are handed out of band to realtors and admins and checked at signup
//! by recomputing the plaintext from the request and the server secret.
//!
//! ```rust
//! use auth::domain::value_object::email::Email;
//! use auth::domain::value_object::product_key::{ProductKey, ProductKeySecret};
//! use kernel::principal::UserType;
//!
//! let secret = ProductKeySecret::new("s");
//! let email = Email::new("a@x.com").unwrap();
//! let key = ProductKey::issue(&email, UserType::Realtor, &secret).unwrap();
//! assert!(key.matches(&email, UserType::Realtor, &secret));
//! assert!(!ProductKey::presented("bad").matches(&email, UserType::Realtor, &secret));
//! ```

use std::fmt;

use kernel::error::app_error::{AppResult, ResultExt};
use kernel::error::kind::ErrorKind;
use kernel::principal::UserType;
use platform::secret_hash::{hash_secret, verify_secret};

use crate::domain::value_object::email::Email;

/// Server-side secret mixed into every product key
#[derive(Clone)]
pub struct ProductKeySecret(String);

impl ProductKeySecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ProductKeySecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ProductKeySecret").field(&"[REDACTED]").finish()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct ProductKey(String);

impl ProductKey {
    fn plaintext(email: &Email, user_type: UserType, secret: &ProductKeySecret) -> String {
        format!("{}-{}-{}", email.as_str(), user_type.code(), secret.as_str())
    }

    /// Generate a fresh key; each call uses a new salt
    pub fn issue(email: &Email, user_type: UserType, secret: &ProductKeySecret) -> AppResult<Self> {
        hash_secret(Self::plaintext(email, user_type, secret).as_bytes(), None)
            .map(Self)
            .map_app_err(ErrorKind::InternalServerError, "Product key generation failed")
    }

    /// Key as supplied by a client, unchecked
    pub fn presented(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// A key that is not a PHC string never matches
    pub fn matches(&self, email: &Email, user_type: UserType, secret: &ProductKeySecret) -> bool {
        verify_secret(
            Self::plaintext(email, user_type, secret).as_bytes(),
            &self.0,
            None,
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for ProductKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ProductKey").field(&"[REDACTED]").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(raw: &str) -> Email {
        Email::new(raw).unwrap()
    }

    #[test]
    fn test_issued_key_matches_same_triple() {
        let secret = ProductKeySecret::new("s");
        let key = ProductKey::issue(&email("a@x.com"), UserType::Realtor, &secret).unwrap();
        assert!(key.as_str().starts_with("$argon2id$"));
        assert!(key.matches(&email("a@x.com"), UserType::Realtor, &secret));
    }

    #[test]
    fn test_issued_key_rejects_other_triples() {
        let secret = ProductKeySecret::new("s");
        let key = ProductKey::issue(&email("a@x.com"), UserType::Realtor, &secret).unwrap();

        assert!(!key.matches(&email("b@x.com"), UserType::Realtor, &secret));
        assert!(!key.matches(&email("a@x.com"), UserType::Admin, &secret));
        assert!(!key.matches(&email("a@x.com"), UserType::Realtor, &ProductKeySecret::new("t")));
    }

    #[test]
    fn test_email_case_does_not_change_key() {
        let secret = ProductKeySecret::new("s");
        let key = ProductKey::issue(&email("A@X.com"), UserType::Admin, &secret).unwrap();
        assert!(key.matches(&email("a@x.com"), UserType::Admin, &secret));
    }

    #[test]
    fn test_malformed_key_never_matches() {
        let secret = ProductKeySecret::new("s");
        for raw in ["bad", "", "$argon2id$", "a@x.com-REALTOR-s"] {
            assert!(!ProductKey::presented(raw).matches(&email("a@x.com"), UserType::Realtor, &secret));
        }
    }

    #[test]
    fn test_key_with_raised_cost_never_matches() {
        let secret = ProductKeySecret::new("s");
        let issued = ProductKey::issue(&email("a@x.com"), UserType::Realtor, &secret).unwrap();
        let raised = issued.as_str().replace("m=19456,t=2,p=1", "m=262144,t=16,p=1");
        assert_ne!(raised, issued.as_str());

        let key = ProductKey::presented(raised);
        assert!(!key.matches(&email("a@x.com"), UserType::Realtor, &secret));
    }

    #[test]
    fn test_keys_are_salted() {
        let secret = ProductKeySecret::new("s");
        let a = ProductKey::issue(&email("a@x.com"), UserType::Realtor, &secret).unwrap();
        let b = ProductKey::issue(&email("a@x.com"), UserType::Realtor, &secret).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_debug_redacted() {
        assert!(!format!("{:?}", ProductKeySecret::new("topsecret")).contains("topsecret"));
        assert!(!format!("{:?}", ProductKey::presented("abc")).contains("abc"));
    }
}
