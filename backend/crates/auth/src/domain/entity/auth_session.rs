//! Auth Session Entity
//!
//! Server-side session row referenced by the bearer token.

use chrono::{DateTime, Duration, Utc};
use kernel::principal::{Principal, UserType};
use uuid::Uuid;

use crate::domain::value_object::{public_id::PublicId, user_id::UserId};

#[derive(Debug, Clone)]
pub struct AuthSession {
    /// Session ID (UUID v4)
    pub session_id: Uuid,
    pub user_id: UserId,
    /// Public ID for API responses
    pub public_id: PublicId,
    /// User type at session creation
    pub user_type: UserType,
    /// Session expiration (Unix timestamp ms)
    pub expires_at_ms: i64,
    pub created_at: DateTime<Utc>,
    pub last_activity_at: DateTime<Utc>,
}

impl AuthSession {
    /// TTL is provided by the application layer (config), not hard-coded here.
    pub fn new(user_id: UserId, public_id: PublicId, user_type: UserType, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            session_id: Uuid::new_v4(),
            user_id,
            public_id,
            user_type,
            expires_at_ms: (now + ttl).timestamp_millis(),
            created_at: now,
            last_activity_at: now,
        }
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp_millis() > self.expires_at_ms
    }

    /// Update last activity timestamp
    pub fn touch(&mut self) {
        self.last_activity_at = Utc::now();
    }

    pub fn remaining_ms(&self) -> i64 {
        (self.expires_at_ms - Utc::now().timestamp_millis()).max(0)
    }

    pub fn principal(&self) -> Principal {
        Principal::new(self.user_id, self.user_type)
    }
}
