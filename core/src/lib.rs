//! # SchoolCast Core
//!
//! Core business logic and domain layer for the SchoolCast backend.
//! This crate contains domain entities, business services, repository interfaces,
//! and error types. The broadcast dispatch routine lives in
//! [`services::broadcast`]; everything else is tenant-scoped CRUD around it.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{
    BroadcastReport, BroadcastSummary, Claims, Contact, ContactUpdate, DashboardStats, DispatchOutcome,
    DispatchResult, Message, NewContact, RECENT_MESSAGES_LIMIT,
};
pub use errors::*;
pub use repositories::{
    ContactRepository, InMemoryContactRepository, InMemoryMessageRepository, MessageRepository,
};
pub use services::*;
