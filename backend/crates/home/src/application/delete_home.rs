//! Delete Home Use Case

use std::sync::Arc;

use kernel::id::HomeId;
use kernel::principal::Principal;

use crate::domain::repository::HomeRepository;
use crate::domain::services::ensure_can_manage;
use crate::error::{HomeError, HomeResult};

pub struct DeleteHomeUseCase<H>
where
    H: HomeRepository,
{
    home_repo: Arc<H>,
}

impl<H> DeleteHomeUseCase<H>
where
    H: HomeRepository,
{
    pub fn new(home_repo: Arc<H>) -> Self {
        Self { home_repo }
    }

    /// Images and inquiries go with the home
    pub async fn execute(&self, principal: &Principal, home_id: &HomeId) -> HomeResult<()> {
        let home = self
            .home_repo
            .find_by_id(home_id)
            .await?
            .ok_or(HomeError::HomeNotFound)?;

        ensure_can_manage(principal, &home)?;

        // lost a race with another delete
        if !self.home_repo.delete(home_id).await? {
            return Err(HomeError::HomeNotFound);
        }

        tracing::info!(home_id = %home_id, user_id = %principal.user_id, "Home deleted");
        Ok(())
    }
}
