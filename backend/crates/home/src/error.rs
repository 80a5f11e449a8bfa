//! Home Error Types
//!
//! Listing-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Home-specific result type alias
pub type HomeResult<T> = Result<T, HomeError>;

#[derive(Debug, Error)]
pub enum HomeError {
    #[error("Home not found")]
    HomeNotFound,

    /// Role or ownership check failed
    #[error("{0}")]
    Forbidden(&'static str),

    /// Validation and extractor errors, passed through with their own kind
    #[error(transparent)]
    App(#[from] AppError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl HomeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            HomeError::HomeNotFound => ErrorKind::NotFound,
            HomeError::Forbidden(_) => ErrorKind::Forbidden,
            HomeError::App(e) => e.kind(),
            HomeError::Database(_) | HomeError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        self.kind().http_status()
    }

    pub fn into_app_error(self) -> AppError {
        match self {
            HomeError::App(e) => e,
            HomeError::Forbidden(reason) => AppError::forbidden(reason),
            HomeError::Database(e) => AppError::from(e),
            HomeError::Internal(msg) => AppError::internal("Internal server error")
                .with_source(std::io::Error::other(msg)),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    fn log(&self) {
        match self {
            HomeError::Database(e) => {
                tracing::error!(error = %e, "Home database error");
            }
            HomeError::Internal(msg) => {
                tracing::error!(message = %msg, "Home internal error");
            }
            HomeError::App(e) if e.is_server_error() => {
                tracing::error!(error = ?e, "Home internal error");
            }
            HomeError::Forbidden(reason) => {
                tracing::warn!(reason, "Listing access denied");
            }
            _ => {
                tracing::debug!(error = %self, "Home error");
            }
        }
    }
}

impl IntoResponse for HomeError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

impl From<JsonRejection> for HomeError {
    fn from(rejection: JsonRejection) -> Self {
        HomeError::App(rejection.into())
    }
}

impl From<PathRejection> for HomeError {
    fn from(rejection: PathRejection) -> Self {
        HomeError::App(rejection.into())
    }
}

impl From<QueryRejection> for HomeError {
    fn from(rejection: QueryRejection) -> Self {
        HomeError::App(rejection.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(HomeError::HomeNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(HomeError::Forbidden("no").status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            HomeError::from(AppError::bad_request("bad")).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_forbidden_reason_is_detail() {
        let app = HomeError::Forbidden("Only buyers can send inquiries").into_app_error();
        assert_eq!(app.kind(), ErrorKind::Forbidden);
        assert_eq!(app.message(), "Only buyers can send inquiries");
    }
}
