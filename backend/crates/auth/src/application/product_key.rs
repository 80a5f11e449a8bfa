//! Generate Product Key Use Case
//!
//! Issues the key a privileged user will present at signup.

use std::sync::Arc;

use kernel::principal::UserType;

use crate::application::config::AuthConfig;
use crate::domain::value_object::{email::Email, product_key::ProductKey};
use crate::error::AuthResult;

pub struct GenerateProductKeyUseCase {
    config: Arc<AuthConfig>,
}

impl GenerateProductKeyUseCase {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    pub fn execute(&self, email: &str, user_type: UserType) -> AuthResult<ProductKey> {
        let email = Email::new(email)?;
        let key = ProductKey::issue(&email, user_type, &self.config.product_key_secret)?;

        tracing::info!(user_type = %user_type, "Product key generated");

        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_key_matches() {
        let config = Arc::new(AuthConfig::default().with_product_key_secret("s"));
        let key = GenerateProductKeyUseCase::new(config.clone())
            .execute(" A@x.com ", UserType::Realtor)
            .unwrap();

        let email = Email::new("a@x.com").unwrap();
        assert!(key.matches(&email, UserType::Realtor, &config.product_key_secret));
    }

    #[test]
    fn test_invalid_email_rejected() {
        let config = Arc::new(AuthConfig::default());
        let err = GenerateProductKeyUseCase::new(config)
            .execute("not-an-email", UserType::Admin)
            .unwrap_err();
        assert_eq!(err.status_code().as_u16(), 400);
    }
}
