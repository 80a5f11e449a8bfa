//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Home, Image, Message)
//! - Domain value objects (PropertyType, Price, HomeFilter)
//! - Domain services (role and ownership rules)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;
