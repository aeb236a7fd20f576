//! In-memory implementation of MessageRepository for development and testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::message::Message;
use crate::errors::DomainError;

use super::trait_::MessageRepository;

/// Broadcast records kept in process memory, in insertion order
#[derive(Clone)]
pub struct InMemoryMessageRepository {
    messages: Arc<RwLock<Vec<Message>>>,
}

impl InMemoryMessageRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            messages: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl Default for InMemoryMessageRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn create(&self, message: Message) -> Result<Message, DomainError> {
        let mut messages = self.messages.write().await;
        messages.push(message.clone());
        Ok(message)
    }

    async fn find_by_id(&self, school_id: Uuid, id: Uuid) -> Result<Option<Message>, DomainError> {
        let messages = self.messages.read().await;
        Ok(messages
            .iter()
            .find(|m| m.id == id && m.school_id == school_id)
            .cloned())
    }

    async fn list_recent(&self, school_id: Uuid, limit: usize) -> Result<Vec<Message>, DomainError> {
        let messages = self.messages.read().await;
        // Later inserts win ties on created_at
        let mut recent: Vec<(usize, &Message)> = messages
            .iter()
            .enumerate()
            .filter(|(_, m)| m.school_id == school_id)
            .collect();
        recent.sort_by(|(ia, a), (ib, b)| b.created_at.cmp(&a.created_at).then(ib.cmp(ia)));
        Ok(recent.into_iter().take(limit).map(|(_, m)| m.clone()).collect())
    }

    async fn count_by_school(&self, school_id: Uuid) -> Result<u64, DomainError> {
        let messages = self.messages.read().await;
        Ok(messages.iter().filter(|m| m.school_id == school_id).count() as u64)
    }
}
