//! Shared Kernel - Domain-crossing minimal core
//!
//! Vocabulary shared by the `auth` and `home` feature crates:
//! - The unified error type, its HTTP classification and result alias
//! - Typed UUID identifiers
//! - The authenticated caller ([`principal::Principal`]) and the user types
//!   that role checks are written against
//!
//! Only things whose meaning is identical in every feature crate live here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
pub mod principal;
