//! MySQL implementation of the ContactRepository trait.
//!
//! Phone uniqueness per school is enforced by the
//! `UNIQUE (school_id, phone)` index; a duplicate-key error becomes
//! `DomainError::Conflict`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use sc_core::domain::entities::contact::Contact;
use sc_core::errors::DomainError;
use sc_core::repositories::ContactRepository;

use super::{column_error, is_duplicate_key, parse_uuid, storage_error};

const CONTACT_COLUMNS: &str = "id, school_id, name, phone, email, grade, section, parent_name, parent_phone, created_at, updated_at";

/// MySQL implementation of ContactRepository
pub struct MySqlContactRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlContactRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Contact entity
    fn row_to_contact(row: &sqlx::mysql::MySqlRow) -> Result<Contact, DomainError> {
        let id: String = row.try_get("id").map_err(|e| column_error("id", e))?;
        let school_id: String = row.try_get("school_id").map_err(|e| column_error("school_id", e))?;

        Ok(Contact {
            id: parse_uuid("contact", &id)?,
            school_id: parse_uuid("school", &school_id)?,
            name: row.try_get("name").map_err(|e| column_error("name", e))?,
            phone: row.try_get("phone").map_err(|e| column_error("phone", e))?,
            email: row.try_get("email").map_err(|e| column_error("email", e))?,
            grade: row.try_get("grade").map_err(|e| column_error("grade", e))?,
            section: row.try_get("section").map_err(|e| column_error("section", e))?,
            parent_name: row.try_get("parent_name").map_err(|e| column_error("parent_name", e))?,
            parent_phone: row.try_get("parent_phone").map_err(|e| column_error("parent_phone", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| column_error("created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| column_error("updated_at", e))?,
        })
    }

    fn map_write_error(context: &str, e: sqlx::Error) -> DomainError {
        if is_duplicate_key(&e) {
            DomainError::Conflict {
                message: "Contact with this phone number already exists in your school".to_string(),
            }
        } else {
            storage_error(context, e)
        }
    }
}

#[async_trait]
impl ContactRepository for MySqlContactRepository {
    async fn create(&self, contact: Contact) -> Result<Contact, DomainError> {
        let query = r#"
            INSERT INTO contacts (
                id, school_id, name, phone, email, grade, section,
                parent_name, parent_phone, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(contact.id.to_string())
            .bind(contact.school_id.to_string())
            .bind(&contact.name)
            .bind(&contact.phone)
            .bind(&contact.email)
            .bind(&contact.grade)
            .bind(&contact.section)
            .bind(&contact.parent_name)
            .bind(&contact.parent_phone)
            .bind(contact.created_at)
            .bind(contact.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::map_write_error("Failed to create contact", e))?;

        Ok(contact)
    }

    async fn find_by_id(&self, school_id: Uuid, id: Uuid) -> Result<Option<Contact>, DomainError> {
        let query = format!(
            "SELECT {} FROM contacts WHERE id = ? AND school_id = ? LIMIT 1",
            CONTACT_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(id.to_string())
            .bind(school_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to find contact", e))?;

        row.as_ref().map(Self::row_to_contact).transpose()
    }

    async fn find_by_phone(&self, school_id: Uuid, phone: &str) -> Result<Option<Contact>, DomainError> {
        let query = format!(
            "SELECT {} FROM contacts WHERE school_id = ? AND phone = ? LIMIT 1",
            CONTACT_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(school_id.to_string())
            .bind(phone)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to find contact by phone", e))?;

        row.as_ref().map(Self::row_to_contact).transpose()
    }

    async fn list_by_school(&self, school_id: Uuid) -> Result<Vec<Contact>, DomainError> {
        let query = format!(
            "SELECT {} FROM contacts WHERE school_id = ? ORDER BY created_at ASC, id ASC",
            CONTACT_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(school_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to list contacts", e))?;

        rows.iter().map(Self::row_to_contact).collect()
    }

    async fn update(&self, contact: Contact) -> Result<Contact, DomainError> {
        let query = r#"
            UPDATE contacts
            SET name = ?, phone = ?, email = ?, grade = ?, section = ?,
                parent_name = ?, parent_phone = ?, updated_at = ?
            WHERE id = ? AND school_id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&contact.name)
            .bind(&contact.phone)
            .bind(&contact.email)
            .bind(&contact.grade)
            .bind(&contact.section)
            .bind(&contact.parent_name)
            .bind(&contact.parent_phone)
            .bind(contact.updated_at)
            .bind(contact.id.to_string())
            .bind(contact.school_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| Self::map_write_error("Failed to update contact", e))?;

        // MySQL reports matched-but-unchanged rows as 0 affected; confirm existence
        if result.rows_affected() == 0
            && self.find_by_id(contact.school_id, contact.id).await?.is_none()
        {
            return Err(DomainError::not_found("Contact"));
        }

        Ok(contact)
    }

    async fn delete(&self, school_id: Uuid, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = ? AND school_id = ?")
            .bind(id.to_string())
            .bind(school_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to delete contact", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn count_by_school(&self, school_id: Uuid) -> Result<u64, DomainError> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM contacts WHERE school_id = ?")
            .bind(school_id.to_string())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| storage_error("Failed to count contacts", e))?;

        let total: i64 = row.try_get("total").map_err(|e| column_error("total", e))?;
        Ok(total.max(0) as u64)
    }
}
