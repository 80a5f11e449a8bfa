//! Auth Middleware
//!
//! Resolves the bearer token on protected routes and stores the caller's
//! [`Principal`] in the request extensions.

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderValue, Request, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use kernel::principal::Principal;
use platform::bearer::extract_bearer;
use std::sync::Arc;

use crate::application::CheckSessionUseCase;
use crate::application::config::AuthConfig;
use crate::domain::repository::AuthSessionRepository;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState<R>
where
    R: AuthSessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

impl<R> AuthMiddlewareState<R>
where
    R: AuthSessionRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: R, config: AuthConfig) -> Self {
        Self {
            repo: Arc::new(repo),
            config: Arc::new(config),
        }
    }
}

/// Middleware that requires a valid auth session
///
/// Use with `axum::middleware::from_fn_with_state`.
pub async fn require_auth_session<R>(
    State(state): State<AuthMiddlewareState<R>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    R: AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let Some(token) = extract_bearer(req.headers()).map(str::to_owned) else {
        return Err(unauthorized(AuthError::SessionInvalid));
    };

    let principal = CheckSessionUseCase::new(state.repo.clone(), state.config.clone())
        .principal(&token)
        .await
        .map_err(unauthorized)?;

    req.extensions_mut().insert::<Principal>(principal);

    Ok(next.run(req).await)
}

fn unauthorized(err: AuthError) -> Response {
    let mut response = err.into_response();
    if response.status() == axum::http::StatusCode::UNAUTHORIZED {
        response
            .headers_mut()
            .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
    }
    response
}
