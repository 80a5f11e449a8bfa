//! Repository Traits
//!
//! Interfaces for listing and inquiry persistence.

use crate::domain::entities::{Home, Inquiry, Message};
use crate::domain::value_objects::HomeFilter;
use crate::error::HomeResult;
use kernel::id::HomeId;

#[trait_variant::make(HomeRepository: Send)]
pub trait LocalHomeRepository {
    /// Listings matching the filter, newest first, with their images
    async fn list(&self, filter: &HomeFilter) -> HomeResult<Vec<Home>>;

    async fn find_by_id(&self, home_id: &HomeId) -> HomeResult<Option<Home>>;

    /// Insert the home and its images atomically
    async fn create(&self, home: &Home) -> HomeResult<()>;

    /// Overwrite scalar fields and the image list
    async fn update(&self, home: &Home) -> HomeResult<()>;

    /// Returns false when the home did not exist
    async fn delete(&self, home_id: &HomeId) -> HomeResult<bool>;
}

#[trait_variant::make(MessageRepository: Send)]
pub trait LocalMessageRepository {
    async fn create(&self, message: &Message) -> HomeResult<()>;

    /// Oldest first
    async fn list_for_home(&self, home_id: &HomeId) -> HomeResult<Vec<Inquiry>>;
}
