//! List Messages Use Case

use std::sync::Arc;

use kernel::id::HomeId;
use kernel::principal::Principal;

use crate::domain::entities::Inquiry;
use crate::domain::repository::{HomeRepository, MessageRepository};
use crate::domain::services::ensure_can_read_messages;
use crate::error::{HomeError, HomeResult};

pub struct ListMessagesUseCase<H, M>
where
    H: HomeRepository,
    M: MessageRepository,
{
    home_repo: Arc<H>,
    message_repo: Arc<M>,
}

impl<H, M> ListMessagesUseCase<H, M>
where
    H: HomeRepository,
    M: MessageRepository,
{
    pub fn new(home_repo: Arc<H>, message_repo: Arc<M>) -> Self {
        Self {
            home_repo,
            message_repo,
        }
    }

    pub async fn execute(&self, principal: &Principal, home_id: &HomeId) -> HomeResult<Vec<Inquiry>> {
        let home = self
            .home_repo
            .find_by_id(home_id)
            .await?
            .ok_or(HomeError::HomeNotFound)?;

        ensure_can_read_messages(principal, &home)?;

        self.message_repo.list_for_home(&home.id).await
    }
}
