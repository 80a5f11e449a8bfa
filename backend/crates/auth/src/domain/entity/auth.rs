//! Auth Entity
//!
//! Authentication credentials for a user.
//! Separated from User entity to isolate sensitive data.

use chrono::{DateTime, Duration, Utc};

use crate::domain::value_object::{user_id::UserId, user_password::UserPassword};

/// Auth credentials entity
///
/// Contains sensitive authentication data:
/// - Password hash
/// - Login failure tracking
#[derive(Debug, Clone)]
pub struct Auth {
    /// Reference to User
    pub user_id: UserId,
    /// Hashed password
    pub password_hash: UserPassword,
    /// Consecutive login failure count
    pub login_failed_count: u16,
    pub last_failed_at: Option<DateTime<Utc>>,
    /// Temporary lockout after too many failures
    pub locked_until: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Auth {
    /// Maximum login failures before temporary lockout
    pub const MAX_LOGIN_FAILURES: u16 = 5;
    /// Lockout duration in minutes
    pub const LOCKOUT_MINUTES: i64 = 15;

    pub fn new(user_id: UserId, password_hash: UserPassword) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            password_hash,
            login_failed_count: 0,
            last_failed_at: None,
            locked_until: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_locked(&self) -> bool {
        self.locked_until.is_some_and(|until| Utc::now() < until)
    }

    /// Record a failed login attempt
    ///
    /// A lock that has already expired starts a fresh count.
    pub fn record_failure(&mut self) {
        let now = Utc::now();
        if self.locked_until.is_some_and(|until| until <= now) {
            self.login_failed_count = 0;
            self.locked_until = None;
        }

        self.login_failed_count = self.login_failed_count.saturating_add(1);
        self.last_failed_at = Some(now);
        self.updated_at = now;

        if self.login_failed_count >= Self::MAX_LOGIN_FAILURES {
            self.locked_until = Some(now + Duration::minutes(Self::LOCKOUT_MINUTES));
        }
    }

    /// Reset login failure count on successful login
    pub fn reset_failures(&mut self) {
        self.login_failed_count = 0;
        self.last_failed_at = None;
        self.locked_until = None;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_object::user_password::RawPassword;

    fn auth() -> Auth {
        let raw = RawPassword::new("TestPassword123!".to_string()).unwrap();
        Auth::new(UserId::new(), UserPassword::from_raw(&raw, None).unwrap())
    }

    #[test]
    fn test_lockout_after_max_failures() {
        let mut auth = auth();
        for _ in 0..Auth::MAX_LOGIN_FAILURES - 1 {
            auth.record_failure();
            assert!(!auth.is_locked());
        }
        auth.record_failure();
        assert!(auth.is_locked());
    }

    #[test]
    fn test_reset_unlocks() {
        let mut auth = auth();
        for _ in 0..Auth::MAX_LOGIN_FAILURES {
            auth.record_failure();
        }
        auth.reset_failures();
        assert!(!auth.is_locked());
        assert_eq!(auth.login_failed_count, 0);
    }

    #[test]
    fn test_expired_lock() {
        let mut auth = auth();
        auth.locked_until = Some(Utc::now() - Duration::minutes(1));
        assert!(!auth.is_locked());
    }

    #[test]
    fn test_failure_after_expired_lock_starts_over() {
        let mut auth = auth();
        for _ in 0..Auth::MAX_LOGIN_FAILURES {
            auth.record_failure();
        }
        assert!(auth.is_locked());

        auth.locked_until = Some(Utc::now() - Duration::minutes(1));
        auth.record_failure();
        assert_eq!(auth.login_failed_count, 1);
        assert!(auth.locked_until.is_none());
        assert!(!auth.is_locked());
    }
}
