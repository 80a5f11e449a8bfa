//! Value Object Module

pub mod email;
pub mod person_name;
pub mod phone;
pub mod product_key;
pub mod public_id;
pub mod session_token;
pub mod user_id;
pub mod user_password;
