//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::{auth::Auth, auth_session::AuthSession, user::User};
use crate::domain::value_object::{email::Email, user_id::UserId};
use crate::error::AuthResult;
use uuid::Uuid;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a new user and its credentials, both or neither
    ///
    /// A duplicate email is `AuthError::EmailTaken`.
    async fn create(&self, user: &User, auth: &Auth) -> AuthResult<()>;

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;

    async fn update(&self, user: &User) -> AuthResult<()>;
}

/// Auth credentials repository trait
#[trait_variant::make(AuthRepository: Send)]
pub trait LocalAuthRepository {
    async fn find_by_user_id(&self, user_id: &UserId) -> AuthResult<Option<Auth>>;

    async fn update(&self, auth: &Auth) -> AuthResult<()>;
}

/// Auth session repository trait
#[trait_variant::make(AuthSessionRepository: Send)]
pub trait LocalAuthSessionRepository {
    async fn create(&self, session: &AuthSession) -> AuthResult<()>;

    /// Unexpired session by ID
    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<AuthSession>>;

    /// Update session (last activity)
    async fn update(&self, session: &AuthSession) -> AuthResult<()>;

    async fn delete(&self, session_id: Uuid) -> AuthResult<()>;

    /// Clean up expired sessions
    async fn cleanup_expired(&self) -> AuthResult<u64>;
}
