//! Session Token Value Object
//!
//! Bearer token handed to clients: `<session_id>.<base64url(HMAC-SHA256)>`.
//! The MAC lets us reject forged tokens before touching the database.

use std::fmt;

use platform::crypto::{from_base64_url, hmac_sha256, to_base64_url, verify_hmac_sha256};
use uuid::Uuid;

#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn sign(session_id: Uuid, secret: &[u8]) -> Self {
        let id = session_id.to_string();
        let tag = hmac_sha256(secret, id.as_bytes());
        Self(format!("{}.{}", id, to_base64_url(&tag)))
    }

    /// Session id carried by a well-formed, correctly signed token
    pub fn verify(token: &str, secret: &[u8]) -> Option<Uuid> {
        let (id, tag_b64) = token.split_once('.')?;
        let tag = from_base64_url(tag_b64).ok()?;

        if !verify_hmac_sha256(secret, id.as_bytes(), &tag) {
            return None;
        }

        Uuid::parse_str(id).ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SessionToken").field(&"[REDACTED]").finish()
    }
}
