//! # Infrastructure Layer
//!
//! Concrete implementations of the SchoolCast core seams:
//! - **Database**: MySQL repositories for contacts and broadcast records (SQLx)
//! - **SMS**: messaging providers (Twilio, mock) behind `MessageProviderClient`
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)
//! - `twilio-sms`: Enable the Twilio provider (default)

// Re-export core types for convenience
pub use sc_core::errors::*;

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// SMS provider module
pub mod sms;

/// Configuration types used by the infrastructure layer
pub mod config {
    pub use sc_shared::config::{DatabaseConfig, SmsConfig};
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// SMS service error
    #[error("SMS service error: {0}")]
    Sms(String),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        DomainError::storage(err.to_string())
    }
}
