//! API DTOs (Data Transfer Objects)

use kernel::principal::UserType;
use serde::{Deserialize, Serialize};

use crate::domain::entity::user::User;

// ============================================================================
// Sign Up
// ============================================================================

/// Sign up request
///
/// Absent fields default to empty and are rejected by value-object
/// validation, after the product key check.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignUpRequest {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub password: String,
    pub product_key: Option<String>,
}

/// Issued on signup and signin
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokenResponse {
    pub token: String,
    pub public_id: String,
}

// ============================================================================
// Sign In
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

// ============================================================================
// Product Key
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductKeyRequest {
    pub email: String,
    pub user_type: UserType,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductKeyResponse {
    pub product_key: String,
}

// ============================================================================
// User Info (for authenticated users)
// ============================================================================

/// Current user info response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfoResponse {
    pub public_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub user_type: UserType,
    pub last_login_at: Option<i64>,
}

impl From<User> for UserInfoResponse {
    fn from(user: User) -> Self {
        Self {
            public_id: user.public_id.to_string(),
            name: user.name.to_string(),
            email: user.email.into_db(),
            phone: user.phone.to_string(),
            user_type: user.user_type,
            last_login_at: user.last_login_at.map(|t| t.timestamp_millis()),
        }
    }
}
