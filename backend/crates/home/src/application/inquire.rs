//! Inquire Use Case
//!
//! A buyer asks the listing realtor about a home.

use std::sync::Arc;

use kernel::id::HomeId;
use kernel::principal::Principal;

use crate::domain::entities::Message;
use crate::domain::repository::{HomeRepository, MessageRepository};
use crate::domain::services::ensure_can_inquire;
use crate::domain::value_objects::{MESSAGE_MAX_CHARS, required_text};
use crate::error::{HomeError, HomeResult};

pub struct InquireUseCase<H, M>
where
    H: HomeRepository,
    M: MessageRepository,
{
    home_repo: Arc<H>,
    message_repo: Arc<M>,
}

impl<H, M> InquireUseCase<H, M>
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

    pub async fn execute(
        &self,
        principal: &Principal,
        home_id: &HomeId,
        body: &str,
    ) -> HomeResult<Message> {
        ensure_can_inquire(principal)?;
        let body = required_text("Message", body, MESSAGE_MAX_CHARS)?;

        let home = self
            .home_repo
            .find_by_id(home_id)
            .await?
            .ok_or(HomeError::HomeNotFound)?;

        let message = Message::new(&home, principal.user_id, body);
        self.message_repo.create(&message).await?;

        tracing::info!(
            home_id = %home.id,
            message_id = %message.id,
            "Inquiry sent"
        );

        Ok(message)
    }
}
