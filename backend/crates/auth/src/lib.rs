//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - Signup per user type (`BUYER`, `REALTOR`, `ADMIN`) and email + password signin
//! - Product keys gating realtor and admin signups
//! - Server-side sessions referenced by signed bearer tokens
//! - Middleware resolving the bearer token into a `kernel::principal::Principal`
//!
//! ## Security Model
//! - Passwords and product keys hashed with Argon2id (NIST SP 800-63B compliant)
//! - Session tokens carry an HMAC-SHA256 tag checked in constant time
//! - Automatic lockout after failed login attempts

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAuthRepository;
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod middleware {
    pub use crate::presentation::middleware::*;
}
