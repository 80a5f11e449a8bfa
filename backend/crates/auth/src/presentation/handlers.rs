//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum_extra::extract::WithRejection;
use kernel::principal::UserType;
use std::sync::Arc;

use platform::bearer::extract_bearer;

use crate::application::config::AuthConfig;
use crate::application::{
    CheckSessionUseCase, CurrentUserUseCase, GenerateProductKeyUseCase, SignInInput,
    SignInUseCase, SignOutUseCase, SignUpInput, SignUpUseCase,
};
use crate::domain::repository::{AuthRepository, AuthSessionRepository, UserRepository};
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    AuthTokenResponse, ProductKeyRequest, ProductKeyResponse, SignInRequest, SignUpRequest,
    UserInfoResponse,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + AuthRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /api/auth/signup/{userType}
pub async fn sign_up<R>(
    State(state): State<AuthAppState<R>>,
    WithRejection(Path(user_type), _): WithRejection<Path<UserType>, AuthError>,
    WithRejection(Json(req), _): WithRejection<Json<SignUpRequest>, AuthError>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + AuthRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let use_case =
        SignUpUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let input = SignUpInput {
        user_type,
        name: req.name,
        phone: req.phone,
        email: req.email,
        password: req.password,
        product_key: req.product_key,
    };

    let output = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthTokenResponse {
            token: output.session_token.into_string(),
            public_id: output.public_id,
        }),
    ))
}

// ============================================================================
// Sign In
// ============================================================================

/// POST /api/auth/signin
pub async fn sign_in<R>(
    State(state): State<AuthAppState<R>>,
    WithRejection(Json(req), _): WithRejection<Json<SignInRequest>, AuthError>,
) -> AuthResult<Json<AuthTokenResponse>>
where
    R: UserRepository + AuthRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.repo.clone(),
        state.config.clone(),
    );

    let output = use_case
        .execute(SignInInput {
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(AuthTokenResponse {
        token: output.session_token.into_string(),
        public_id: output.public_id,
    }))
}

// ============================================================================
// Product Key
// ============================================================================

/// POST /api/auth/key
pub async fn generate_product_key<R>(
    State(state): State<AuthAppState<R>>,
    WithRejection(Json(req), _): WithRejection<Json<ProductKeyRequest>, AuthError>,
) -> AuthResult<Json<ProductKeyResponse>>
where
    R: UserRepository + AuthRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let key = GenerateProductKeyUseCase::new(state.config.clone()).execute(&req.email, req.user_type)?;

    Ok(Json(ProductKeyResponse {
        product_key: key.into_string(),
    }))
}

// ============================================================================
// Current User
// ============================================================================

/// GET /api/auth/me
pub async fn me<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<Json<UserInfoResponse>>
where
    R: UserRepository + AuthRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let token = extract_bearer(&headers).ok_or(AuthError::SessionInvalid)?;

    let principal = CheckSessionUseCase::new(state.repo.clone(), state.config.clone())
        .principal(token)
        .await?;

    let user = CurrentUserUseCase::new(state.repo.clone())
        .execute(&principal.user_id)
        .await?;

    Ok(Json(user.into()))
}

// ============================================================================
// Sign Out
// ============================================================================

/// POST /api/auth/signout
pub async fn sign_out<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<StatusCode>
where
    R: UserRepository + AuthRepository + AuthSessionRepository + Clone + Send + Sync + 'static,
{
    let token = extract_bearer(&headers).ok_or(AuthError::SessionInvalid)?;

    SignOutUseCase::new(state.repo.clone(), state.config.clone())
        .execute(token)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
