//! Listing Query Use Cases

use std::sync::Arc;

use kernel::id::HomeId;

use crate::domain::entities::Home;
use crate::domain::repository::HomeRepository;
use crate::domain::value_objects::HomeFilter;
use crate::error::{HomeError, HomeResult};

/// Filtered listing search
pub struct ListHomesUseCase<H>
where
    H: HomeRepository,
{
    home_repo: Arc<H>,
}

impl<H> ListHomesUseCase<H>
where
    H: HomeRepository,
{
    pub fn new(home_repo: Arc<H>) -> Self {
        Self { home_repo }
    }

    pub async fn execute(&self, filter: &HomeFilter) -> HomeResult<Vec<Home>> {
        let homes = self.home_repo.list(filter).await?;
        tracing::debug!(
            property_type = %filter.property_type,
            city = filter.city.as_deref(),
            count = homes.len(),
            "Listing query"
        );
        Ok(homes)
    }
}

pub struct GetHomeUseCase<H>
where
    H: HomeRepository,
{
    home_repo: Arc<H>,
}

impl<H> GetHomeUseCase<H>
where
    H: HomeRepository,
{
    pub fn new(home_repo: Arc<H>) -> Self {
        Self { home_repo }
    }

    pub async fn execute(&self, home_id: &HomeId) -> HomeResult<Home> {
        self.home_repo
            .find_by_id(home_id)
            .await?
            .ok_or(HomeError::HomeNotFound)
    }
}
