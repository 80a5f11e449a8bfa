//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.
//! Contains use case implementations.

pub mod create_home;
pub mod delete_home;
pub mod inquire;
pub mod list_homes;
pub mod list_messages;
pub mod update_home;

pub use create_home::{CreateHomeInput, CreateHomeUseCase};
pub use delete_home::DeleteHomeUseCase;
pub use inquire::InquireUseCase;
pub use list_homes::{GetHomeUseCase, ListHomesUseCase};
pub use list_messages::ListMessagesUseCase;
pub use update_home::{UpdateHomeInput, UpdateHomeUseCase};
