//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

use crate::domain::value_object::product_key::ProductKeySecret;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session secret key for HMAC signing (32 bytes)
    pub session_secret: [u8; 32],
    /// Session TTL (12 hours)
    pub session_ttl: Duration,
    /// Secret mixed into product keys
    pub product_key_secret: ProductKeySecret,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_secret: [0u8; 32],
            session_ttl: Duration::from_secs(12 * 3600),
            product_key_secret: ProductKeySecret::new(""),
            password_pepper: None,
        }
    }
}

impl AuthConfig {
    /// Create config with a random session secret
    pub fn with_random_secret() -> Self {
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&platform::crypto::random_bytes(32));
        Self {
            session_secret: secret,
            ..Default::default()
        }
    }

    /// Random session secret and a fixed, well-known product key secret
    pub fn development() -> Self {
        Self {
            product_key_secret: ProductKeySecret::new("development-product-key-secret"),
            ..Self::with_random_secret()
        }
    }

    pub fn with_product_key_secret(mut self, secret: impl Into<String>) -> Self {
        self.product_key_secret = ProductKeySecret::new(secret);
        self
    }

    pub fn session_ttl_chrono(&self) -> chrono::Duration {
        chrono::Duration::from_std(self.session_ttl).unwrap_or(chrono::Duration::hours(12))
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_secret_differs() {
        let a = AuthConfig::with_random_secret();
        let b = AuthConfig::with_random_secret();
        assert_ne!(a.session_secret, b.session_secret);
        assert_ne!(a.session_secret, [0u8; 32]);
    }

    #[test]
    fn test_ttl_conversion() {
        let config = AuthConfig::default();
        assert_eq!(config.session_ttl_chrono(), chrono::Duration::hours(12));
        assert!(config.pepper().is_none());
    }
}
