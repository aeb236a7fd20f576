//! Domain entities representing core business objects.

pub mod claims;
pub mod contact;
pub mod dispatch;
pub mod message;
pub mod stats;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use claims::Claims;
pub use contact::{Contact, ContactUpdate, NewContact};
pub use dispatch::{BroadcastReport, BroadcastSummary, DispatchOutcome, DispatchResult};
pub use message::{Message, RECENT_MESSAGES_LIMIT};
pub use stats::DashboardStats;
