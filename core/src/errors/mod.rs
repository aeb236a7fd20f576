//! Domain-specific error types and error handling.

use thiserror::Error;

use crate::domain::entities::dispatch::DispatchResult;


/// Validation errors
///
/// Raised before any side effect takes place.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid format: {field}")]
    InvalidFormat { field: String },

    #[error("Too long: {field} (max: {max}, actual: {actual})")]
    TooLong {
        field: String,
        max: usize,
        actual: usize,
    },

    #[error("No recipients to send to")]
    EmptyRecipients,
}

/// Failure reported by the messaging provider for a single send
///
/// Invalid numbers, auth failures, quota and network errors are all carried
/// as opaque text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ProviderError {
    pub message: String,
}

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Unauthorized access")]
    Unauthorized,

    /// The backing store failed or is unreachable
    #[error("Storage error: {message}")]
    Storage { message: String },

    /// Every recipient was attempted but the broadcast record could not be saved
    #[error("Broadcast sent but not recorded: {reason}")]
    BroadcastNotRecorded {
        reason: String,
        results: Vec<DispatchResult>,
    },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

impl DomainError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource: resource.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        DomainError::Storage {
            message: message.into(),
        }
    }

    pub fn required(field: impl Into<String>) -> Self {
        DomainError::ValidationErr(ValidationError::RequiredField {
            field: field.into(),
        })
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
