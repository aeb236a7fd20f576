//! Persistence of the broadcast log entry

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::message::Message;
use crate::errors::DomainResult;
use crate::repositories::MessageRepository;

/// Stores one [`Message`] per broadcast, independent of per-recipient outcomes
pub struct BroadcastRecorder<M: MessageRepository + ?Sized> {
    repository: Arc<M>,
}

impl<M: MessageRepository + ?Sized> BroadcastRecorder<M> {
    pub fn new(repository: Arc<M>) -> Self {
        Self { repository }
    }

    /// Record a broadcast and return the stored record id
    ///
    /// Fails with `DomainError::Storage` when the store cannot be written.
    pub async fn record(&self, body: &str, school_id: Uuid, sent_by: Option<Uuid>) -> DomainResult<Uuid> {
        let message = Message::new(body, school_id, sent_by);
        let stored = self.repository.create(message).await?;

        tracing::info!(
            message_id = %stored.id,
            school_id = %school_id,
            event = "broadcast_recorded",
            "Broadcast recorded"
        );

        Ok(stored.id)
    }
}
