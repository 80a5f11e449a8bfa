//! Sign Up Use Case
//!
//! Creates a new account of the requested user type and opens a session.
//! Realtor and admin signups must present a product key issued for the same
//! email and type.

use std::sync::Arc;

use kernel::principal::UserType;

use crate::application::config::AuthConfig;
use crate::domain::entity::{auth::Auth, auth_session::AuthSession, user::User};
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::domain::value_object::{
    email::Email,
    person_name::PersonName,
    phone::Phone,
    product_key::ProductKey,
    session_token::SessionToken,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub user_type: UserType,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub password: String,
    pub product_key: Option<String>,
}

/// Sign up output
pub struct SignUpOutput {
    pub session_token: SessionToken,
    pub public_id: String,
}

/// Sign up use case
pub struct SignUpUseCase<U, S>
where
    U: UserRepository,
    S: AuthSessionRepository,
{
    user_repo: Arc<U>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, S> SignUpUseCase<U, S>
where
    U: UserRepository,
    S: AuthSessionRepository,
{
    pub fn new(user_repo: Arc<U>, session_repo: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            user_repo,
            session_repo,
            config,
        }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        let user_type = input.user_type;

        // Missing or empty key fails before any hashing
        let presented = input.product_key.filter(|key| !key.is_empty());
        let product_key = match (user_type.requires_product_key(), presented) {
            (true, None) => return Err(AuthError::ProductKeyMissing),
            (true, Some(key)) => Some(ProductKey::presented(key)),
            (false, _) => None,
        };

        let email = Email::new(&input.email)?;

        let key_ok = product_key
            .map(|key| key.matches(&email, user_type, &self.config.product_key_secret))
            .unwrap_or(true);
        if !key_ok {
            return Err(AuthError::ProductKeyInvalid);
        }

        let name = PersonName::new(&input.name)?;
        let phone = Phone::new(&input.phone)?;
        let raw_password = RawPassword::new(input.password)?;

        if self.user_repo.exists_by_email(&email).await? {
            return Err(AuthError::EmailTaken);
        }

        let password_hash = UserPassword::from_raw(&raw_password, self.config.pepper())?;

        let mut user = User::new(name, phone, email, user_type);
        user.record_login();
        let auth = Auth::new(user.user_id, password_hash);

        self.user_repo.create(&user, &auth).await?;

        let session = AuthSession::new(
            user.user_id,
            user.public_id,
            user.user_type,
            self.config.session_ttl_chrono(),
        );
        self.session_repo.create(&session).await?;

        tracing::info!(
            public_id = %user.public_id,
            user_type = %user.user_type,
            "User signed up"
        );

        Ok(SignUpOutput {
            session_token: SessionToken::sign(session.session_id, &self.config.session_secret),
            public_id: user.public_id.to_string(),
        })
    }
}
