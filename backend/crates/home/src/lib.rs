//! Home Listing Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, access rules, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers
//!
//! ## Access Model
//! - Listing search and listing detail are anonymous
//! - Mutating routes read the caller from a `kernel::principal::Principal`
//!   request extension, inserted by the auth crate's session middleware
//! - Only realtors create listings; the owning realtor or an admin edits and
//!   deletes them
//! - Buyers send inquiries; only the owning realtor reads them

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{HomeError, HomeResult};
pub use infra::postgres::PgHomeRepository;
pub use presentation::router::{
    protected_home_router, protected_home_router_generic, public_home_router,
    public_home_router_generic,
};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
