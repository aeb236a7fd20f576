//! Database module - MySQL implementations using SQLx
//!
//! - Connection pool management with health checks
//! - Contact and broadcast record repositories
//!
//! Expected tables (migrations are managed outside this crate):
//!
//! ```sql
//! CREATE TABLE contacts (
//!     id CHAR(36) PRIMARY KEY,
//!     school_id CHAR(36) NOT NULL,
//!     name VARCHAR(255) NOT NULL,
//!     phone VARCHAR(32) NOT NULL,
//!     email VARCHAR(255) NULL,
//!     grade VARCHAR(32) NULL,
//!     section VARCHAR(32) NULL,
//!     parent_name VARCHAR(255) NULL,
//!     parent_phone VARCHAR(32) NULL,
//!     created_at TIMESTAMP(6) NOT NULL,
//!     updated_at TIMESTAMP(6) NOT NULL,
//!     UNIQUE KEY uq_contacts_school_phone (school_id, phone)
//! );
//!
//! CREATE TABLE messages (
//!     id CHAR(36) PRIMARY KEY,
//!     school_id CHAR(36) NOT NULL,
//!     text TEXT NOT NULL,
//!     sent_by CHAR(36) NULL,
//!     created_at TIMESTAMP(6) NOT NULL,
//!     KEY idx_messages_school_created (school_id, created_at)
//! );
//! ```

pub mod connection;
pub mod mysql;


// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::{MySqlContactRepository, MySqlMessageRepository};
