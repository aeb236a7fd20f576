use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::message::{Message, RECENT_MESSAGES_LIMIT};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::MessageRepository;

/// Read access to a school's broadcast records
pub struct MessageHistoryService<M: MessageRepository + ?Sized> {
    repository: Arc<M>,
}

impl<M: MessageRepository + ?Sized> MessageHistoryService<M> {
    pub fn new(repository: Arc<M>) -> Self {
        Self { repository }
    }

    /// Latest broadcasts of a school, newest first
    pub async fn recent_messages(&self, school_id: Uuid) -> DomainResult<Vec<Message>> {
        self.repository.list_recent(school_id, RECENT_MESSAGES_LIMIT).await
    }

    pub async fn get_message(&self, school_id: Uuid, id: Uuid) -> DomainResult<Message> {
        self.repository
            .find_by_id(school_id, id)
            .await?
            .ok_or_else(|| DomainError::not_found("Message"))
    }
}
