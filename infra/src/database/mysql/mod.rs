//! MySQL repository implementations

pub mod contact_repository_impl;
pub mod message_repository_impl;

pub use contact_repository_impl::MySqlContactRepository;
pub use message_repository_impl::MySqlMessageRepository;

use sc_core::errors::DomainError;
use uuid::Uuid;

/// Map a query failure to a storage error with context
pub(crate) fn storage_error(context: &str, e: sqlx::Error) -> DomainError {
    tracing::error!("{}: {}", context, e);
    DomainError::storage(format!("{}: {}", context, e))
}

/// Whether the error is a unique key violation
pub(crate) fn is_duplicate_key(e: &sqlx::Error) -> bool {
    match e {
        sqlx::Error::Database(db_err) => db_err.is_unique_violation(),
        _ => false,
    }
}

pub(crate) fn parse_uuid(field: &str, value: &str) -> Result<Uuid, DomainError> {
    Uuid::parse_str(value).map_err(|e| DomainError::Internal {
        message: format!("Invalid {} UUID: {}", field, e),
    })
}

pub(crate) fn column_error(column: &str, e: sqlx::Error) -> DomainError {
    DomainError::Internal {
        message: format!("Failed to get {}: {}", column, e),
    }
}
