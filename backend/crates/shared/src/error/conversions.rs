//! Error conversions
//!
//! `From` impls into [`AppError`] for the libraries the feature crates use,
//! and the axum response rendering.

use super::app_error::AppError;

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_data() {
            AppError::bad_request(format!("JSON parse error: {}", err)).with_source(err)
        } else {
            AppError::internal("JSON serialization error").with_source(err)
        }
    }
}

// ============================================================================
// SQLx conversions (feature-gated)
// ============================================================================

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => AppError::not_found("Record not found").with_source(err),
            sqlx::Error::PoolTimedOut => {
                AppError::service_unavailable("Database connection pool exhausted").with_source(err)
            }
            sqlx::Error::Database(db_err) => {
                // https://www.postgresql.org/docs/current/errcodes-appendix.html
                let app_err = match db_err.code().as_deref() {
                    Some("23505") => AppError::conflict("Duplicate key value"),
                    Some("23503") => AppError::conflict("Foreign key violation"),
                    Some("23502") => AppError::bad_request("Required field is null"),
                    Some("23514") => AppError::bad_request("Check constraint violation"),
                    Some("53000" | "53100" | "53200" | "53300") => {
                        AppError::service_unavailable("Database resource exhausted")
                    }
                    Some("57P01" | "57P02" | "57P03") => {
                        AppError::service_unavailable("Database unavailable")
                    }
                    _ => AppError::internal("Database error"),
                };
                app_err.with_source(err)
            }
            sqlx::Error::Io(_) => {
                AppError::service_unavailable("Database connection error").with_source(err)
            }
            _ => AppError::internal("Database error").with_source(err),
        }
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.kind().http_status();
        (status, axum::Json(self.problem_json())).into_response()
    }
}

/// Extractor rejections keep axum's status (400/415/422) but use our envelope
#[cfg(feature = "axum")]
fn from_rejection(status: http::StatusCode, detail: String) -> AppError {
    use super::kind::ErrorKind;

    let kind = match status.as_u16() {
        422 => ErrorKind::UnprocessableEntity,
        s if s >= 500 => ErrorKind::InternalServerError,
        _ => ErrorKind::BadRequest,
    };
    AppError::new(kind, detail)
}

#[cfg(feature = "axum")]
impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        from_rejection(rejection.status(), rejection.body_text())
    }
}

#[cfg(feature = "axum")]
impl From<axum::extract::rejection::PathRejection> for AppError {
    fn from(rejection: axum::extract::rejection::PathRejection) -> Self {
        from_rejection(rejection.status(), rejection.body_text())
    }
}

#[cfg(feature = "axum")]
impl From<axum::extract::rejection::QueryRejection> for AppError {
    fn from(rejection: axum::extract::rejection::QueryRejection) -> Self {
        from_rejection(rejection.status(), rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::kind::ErrorKind;

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let app_err: AppError = json_err.into();
        assert_eq!(app_err.kind(), ErrorKind::BadRequest);
    }

    #[cfg(feature = "sqlx")]
    #[test]
    fn test_sqlx_row_not_found() {
        let app_err: AppError = sqlx::Error::RowNotFound.into();
        assert_eq!(app_err.kind(), ErrorKind::NotFound);

        let app_err: AppError = sqlx::Error::PoolTimedOut.into();
        assert_eq!(app_err.kind(), ErrorKind::ServiceUnavailable);
    }

    #[cfg(feature = "axum")]
    #[test]
    fn test_into_response_status() {
        use axum::response::IntoResponse;

        let response = AppError::unauthorized("nope").into_response();
        assert_eq!(response.status(), http::StatusCode::UNAUTHORIZED);

        let response = AppError::new(ErrorKind::Locked, "locked").into_response();
        assert_eq!(response.status().as_u16(), 423);
    }

    #[cfg(feature = "axum")]
    #[test]
    fn test_rejection_mapping() {
        assert_eq!(
            from_rejection(http::StatusCode::BAD_REQUEST, "bad".into()).kind(),
            ErrorKind::BadRequest
        );
        assert_eq!(
            from_rejection(http::StatusCode::UNSUPPORTED_MEDIA_TYPE, "ct".into()).kind(),
            ErrorKind::BadRequest
        );
        assert_eq!(
            from_rejection(http::StatusCode::UNPROCESSABLE_ENTITY, "shape".into()).kind(),
            ErrorKind::UnprocessableEntity
        );
    }
}
