//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations with no business meaning:
//! - Cryptographic helpers (random bytes, HMAC-SHA256, Base64)
//! - Salted Argon2id hashing of arbitrary secrets
//! - Password policy and hashing (NIST SP 800-63B)
//! - Bearer token extraction from request headers

pub mod bearer;
pub mod crypto;
pub mod password;
pub mod secret_hash;
