//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("User not found")]
    UserNotFound,

    #[error("Email is already registered")]
    EmailTaken,

    /// Unknown email or wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Product key is required for this user type")]
    ProductKeyMissing,

    #[error("Invalid product key")]
    ProductKeyInvalid,

    /// Too many failed attempts
    #[error("Account is temporarily locked")]
    AccountLocked,

    /// Missing, forged or expired bearer token
    #[error("Session not found or expired")]
    SessionInvalid,

    /// Validation and extractor errors, passed through with their own kind
    #[error(transparent)]
    App(#[from] AppError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::EmailTaken => ErrorKind::Conflict,
            AuthError::InvalidCredentials
            | AuthError::ProductKeyMissing
            | AuthError::ProductKeyInvalid
            | AuthError::SessionInvalid => ErrorKind::Unauthorized,
            AuthError::AccountLocked => ErrorKind::Locked,
            AuthError::App(e) => e.kind(),
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        self.kind().http_status()
    }

    /// Store errors keep their driver classification (409, 503, ...)
    pub fn into_app_error(self) -> AppError {
        match self {
            AuthError::App(e) => e,
            AuthError::Database(e) => AppError::from(e),
            AuthError::Internal(msg) => AppError::internal("Internal server error").with_source(
                std::io::Error::other(msg),
            ),
            AuthError::AccountLocked => AppError::new(ErrorKind::Locked, self.to_string())
                .with_action("Try again later"),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::App(e) if e.is_server_error() => {
                tracing::error!(error = ?e, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::ProductKeyMissing | AuthError::ProductKeyInvalid => {
                tracing::warn!(error = %self, "Rejected privileged signup");
            }
            AuthError::AccountLocked => {
                tracing::warn!("Login attempt on locked account");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

impl From<JsonRejection> for AuthError {
    fn from(rejection: JsonRejection) -> Self {
        AuthError::App(rejection.into())
    }
}

impl From<PathRejection> for AuthError {
    fn from(rejection: PathRejection) -> Self {
        AuthError::App(rejection.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AuthError::ProductKeyMissing.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::ProductKeyInvalid.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::InvalidCredentials.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::EmailTaken.status_code(), StatusCode::CONFLICT);
        assert_eq!(AuthError::AccountLocked.status_code().as_u16(), 423);
        assert_eq!(
            AuthError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_app_error_passthrough() {
        let err = AuthError::from(AppError::bad_request("Invalid email format"));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.into_app_error().message(), "Invalid email format");
    }

    #[test]
    fn test_internal_message_hidden() {
        let app = AuthError::Internal("secret detail".into()).into_app_error();
        assert!(!app.message().contains("secret detail"));
    }
}
