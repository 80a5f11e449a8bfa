//! Sign In Use Case
//!
//! Authenticates a user by email and password and creates a session.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::auth_session::AuthSession;
use crate::domain::repository::{AuthRepository, AuthSessionRepository, UserRepository};
use crate::domain::value_object::{
    email::Email, session_token::SessionToken, user_password::RawPassword,
};
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in output
pub struct SignInOutput {
    pub session_token: SessionToken,
    pub public_id: String,
}

/// Sign in use case
pub struct SignInUseCase<U, A, S>
where
    U: UserRepository,
    A: AuthRepository,
    S: AuthSessionRepository,
{
    user_repo: Arc<U>,
    auth_repo: Arc<A>,
    session_repo: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<U, A, S> SignInUseCase<U, A, S>
where
    U: UserRepository,
    A: AuthRepository,
    S: AuthSessionRepository,
{
    pub fn new(
        user_repo: Arc<U>,
        auth_repo: Arc<A>,
        session_repo: Arc<S>,
        config: Arc<AuthConfig>,
    ) -> Self {
        Self {
            user_repo,
            auth_repo,
            session_repo,
            config,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        // A malformed email cannot belong to an account
        let email = Email::new(&input.email).map_err(|_| AuthError::InvalidCredentials)?;

        let mut user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let mut auth = self
            .auth_repo
            .find_by_user_id(&user.user_id)
            .await?
            .ok_or_else(|| AuthError::Internal("Auth credentials not found".to_string()))?;

        if auth.is_locked() {
            return Err(AuthError::AccountLocked);
        }

        let candidate = RawPassword::candidate(input.password);
        if !auth.password_hash.verify(&candidate, self.config.pepper()) {
            auth.record_failure();
            self.auth_repo.update(&auth).await?;
            return Err(AuthError::InvalidCredentials);
        }

        auth.reset_failures();
        self.auth_repo.update(&auth).await?;

        user.record_login();
        self.user_repo.update(&user).await?;

        let session = AuthSession::new(
            user.user_id,
            user.public_id,
            user.user_type,
            self.config.session_ttl_chrono(),
        );
        self.session_repo.create(&session).await?;

        tracing::info!(
            public_id = %user.public_id,
            session_id = %session.session_id,
            "User signed in"
        );

        Ok(SignInOutput {
            session_token: SessionToken::sign(session.session_id, &self.config.session_secret),
            public_id: user.public_id.to_string(),
        })
    }
}
