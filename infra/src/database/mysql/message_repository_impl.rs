//! MySQL implementation of the MessageRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use sc_core::domain::entities::message::Message;
use sc_core::errors::DomainError;
use sc_core::repositories::MessageRepository;

use super::{column_error, parse_uuid, storage_error};

/// MySQL implementation of MessageRepository
pub struct MySqlMessageRepository {
    pool: MySqlPool,
}

impl MySqlMessageRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_message(row: &sqlx::mysql::MySqlRow) -> Result<Message, DomainError> {
        let id: String = row.try_get("id").map_err(|e| column_error("id", e))?;
        let school_id: String = row.try_get("school_id").map_err(|e| column_error("school_id", e))?;
        let sent_by: Option<String> = row.try_get("sent_by").map_err(|e| column_error("sent_by", e))?;

        Ok(Message {
            id: parse_uuid("message", &id)?,
            text: row.try_get("text").map_err(|e| column_error("text", e))?,
            school_id: parse_uuid("school", &school_id)?,
            sent_by: sent_by.as_deref().map(|s| parse_uuid("sender", s)).transpose()?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| column_error("created_at", e))?,
        })
    }
}

#[async_trait]
impl MessageRepository for MySqlMessageRepository {
    async fn create(&self, message: Message) -> Result<Message, DomainError> {
        let query = r#"
            INSERT INTO messages (id, school_id, text, sent_by, created_at)
            VALUES (?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(message.id.to_string())
            .bind(message.school_id.to_string())
            .bind(&message.text)
            .bind(message.sent_by.map(|id| id.to_string()))
            .bind(message.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to save broadcast record", e))?;

        Ok(message)
    }

    async fn find_by_id(&self, school_id: Uuid, id: Uuid) -> Result<Option<Message>, DomainError> {
        let row = sqlx::query(
            "SELECT id, school_id, text, sent_by, created_at FROM messages WHERE id = ? AND school_id = ? LIMIT 1",
        )
        .bind(id.to_string())
        .bind(school_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| storage_error("Failed to find broadcast record", e))?;

        row.as_ref().map(Self::row_to_message).transpose()
    }

    async fn list_recent(&self, school_id: Uuid, limit: usize) -> Result<Vec<Message>, DomainError> {
        let rows = sqlx::query(
            "SELECT id, school_id, text, sent_by, created_at FROM messages WHERE school_id = ? ORDER BY created_at DESC LIMIT ?",
        )
        .bind(school_id.to_string())
        .bind(limit as u64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| storage_error("Failed to list broadcast records", e))?;

        rows.iter().map(Self::row_to_message).collect()
    }

    async fn count_by_school(&self, school_id: Uuid) -> Result<u64, DomainError> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM messages WHERE school_id = ?")
            .bind(school_id.to_string())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to count broadcast records", e))?;

        let total: i64 = row.try_get("total").map_err(|e| column_error("total", e))?;
        Ok(total.max(0) as u64)
    }
}
