//! Broadcast record repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::message::Message;
use crate::errors::DomainError;

/// Repository trait for broadcast records
///
/// Records are append-only: there is no update or delete.
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Persist a broadcast record
    ///
    /// # Returns
    /// * `Ok(Message)` - The stored record
    /// * `Err(DomainError::Storage)` - The store could not be written
    async fn create(&self, message: Message) -> Result<Message, DomainError>;

    /// Find a record by id within a school
    async fn find_by_id(&self, school_id: Uuid, id: Uuid) -> Result<Option<Message>, DomainError>;

    /// List the newest records of a school, newest first
    async fn list_recent(&self, school_id: Uuid, limit: usize) -> Result<Vec<Message>, DomainError>;

    /// Count records of a school
    async fn count_by_school(&self, school_id: Uuid) -> Result<u64, DomainError>;

    /// Most recent record of a school
    async fn latest(&self, school_id: Uuid) -> Result<Option<Message>, DomainError> {
        Ok(self.list_recent(school_id, 1).await?.into_iter().next())
    }
}
