//! Domain Services
//!
//! Role and ownership rules for listing operations.

use kernel::principal::{Principal, UserType};

use crate::domain::entities::Home;
use crate::error::{HomeError, HomeResult};

/// Only realtors list homes
pub fn ensure_can_create(principal: &Principal) -> HomeResult<()> {
    if principal.is(UserType::Realtor) {
        Ok(())
    } else {
        Err(HomeError::Forbidden("Only realtors can create listings"))
    }
}

/// The owning realtor, or an admin
pub fn ensure_can_manage(principal: &Principal, home: &Home) -> HomeResult<()> {
    if principal.is_admin() || is_owner(principal, home) {
        Ok(())
    } else {
        Err(HomeError::Forbidden("Only the listing realtor or an admin can modify this listing"))
    }
}

pub fn ensure_can_inquire(principal: &Principal) -> HomeResult<()> {
    if principal.is(UserType::Buyer) {
        Ok(())
    } else {
        Err(HomeError::Forbidden("Only buyers can send inquiries"))
    }
}

pub fn ensure_can_read_messages(principal: &Principal, home: &Home) -> HomeResult<()> {
    if is_owner(principal, home) {
        Ok(())
    } else {
        Err(HomeError::Forbidden("Only the listing realtor can read its inquiries"))
    }
}

fn is_owner(principal: &Principal, home: &Home) -> bool {
    principal.is(UserType::Realtor) && principal.user_id == home.realtor_id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::NewHome;
    use crate::domain::value_objects::{Price, PropertyType};
    use kernel::id::UserId;

    fn home_of(realtor_id: UserId) -> Home {
        Home::new(
            realtor_id,
            NewHome {
                address: "1 Main St".into(),
                number_of_bedrooms: 1,
                number_of_bathrooms: 1.0,
                city: "Austin".into(),
                price: Price::new(1.0).unwrap(),
                land_size: 1.0,
                property_type: PropertyType::Condo,
                images: vec![],
            },
        )
    }

    #[test]
    fn test_create_realtor_only() {
        let id = UserId::new();
        assert!(ensure_can_create(&Principal::new(id, UserType::Realtor)).is_ok());
        assert!(ensure_can_create(&Principal::new(id, UserType::Buyer)).is_err());
        assert!(ensure_can_create(&Principal::new(id, UserType::Admin)).is_err());
    }

    #[test]
    fn test_manage_owner_or_admin() {
        let owner = UserId::new();
        let home = home_of(owner);

        assert!(ensure_can_manage(&Principal::new(owner, UserType::Realtor), &home).is_ok());
        assert!(ensure_can_manage(&Principal::new(UserId::new(), UserType::Admin), &home).is_ok());
        assert!(
            ensure_can_manage(&Principal::new(UserId::new(), UserType::Realtor), &home).is_err()
        );
        assert!(ensure_can_manage(&Principal::new(UserId::new(), UserType::Buyer), &home).is_err());
    }

    #[test]
    fn test_messages_owner_only() {
        let owner = UserId::new();
        let home = home_of(owner);

        assert!(ensure_can_read_messages(&Principal::new(owner, UserType::Realtor), &home).is_ok());
        assert!(
            ensure_can_read_messages(&Principal::new(UserId::new(), UserType::Admin), &home)
                .is_err()
        );
    }

    #[test]
    fn test_inquire_buyer_only() {
        assert!(ensure_can_inquire(&Principal::new(UserId::new(), UserType::Buyer)).is_ok());
        assert!(ensure_can_inquire(&Principal::new(UserId::new(), UserType::Realtor)).is_err());
    }
}
