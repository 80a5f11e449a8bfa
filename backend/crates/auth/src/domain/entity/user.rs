//! User Entity
//!
//! Profile data for buyers, realtors and admins. Credentials live in the
//! separate [`Auth`](super::auth::Auth) entity.

use chrono::{DateTime, Utc};
use kernel::principal::{Principal, UserType};

use crate::domain::value_object::{
    email::Email, person_name::PersonName, phone::Phone, public_id::PublicId, user_id::UserId,
};

#[derive(Debug, Clone)]
pub struct User {
    /// Internal UUID identifier
    pub user_id: UserId,
    /// Public-facing nanoid identifier (URL-safe)
    pub public_id: PublicId,
    pub name: PersonName,
    pub phone: Phone,
    /// Unique, normalized
    pub email: Email,
    /// Fixed at signup
    pub user_type: UserType,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(name: PersonName, phone: Phone, email: Email, user_type: UserType) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            public_id: PublicId::new(),
            name,
            phone,
            email,
            user_type,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Record successful login
    pub fn record_login(&mut self) {
        let now = Utc::now();
        self.last_login_at = Some(now);
        self.updated_at = now;
    }

    pub fn principal(&self) -> Principal {
        Principal::new(self.user_id, self.user_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user() {
        let user = User::new(
            PersonName::new("Jane Doe").unwrap(),
            Phone::new("555-555-5555").unwrap(),
            Email::new("Jane@Example.com").unwrap(),
            UserType::Realtor,
        );

        assert_eq!(user.email.as_str(), "jane@example.com");
        assert!(user.last_login_at.is_none());
        assert_eq!(user.principal(), Principal::new(user.user_id, UserType::Realtor));
    }

    #[test]
    fn test_record_login() {
        let mut user = User::new(
            PersonName::new("Jane Doe").unwrap(),
            Phone::new("555-555-5555").unwrap(),
            Email::new("jane@example.com").unwrap(),
            UserType::Buyer,
        );
        user.record_login();
        assert!(user.last_login_at.is_some());
    }
}
