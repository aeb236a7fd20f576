//! Broadcast record entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of records returned by the message history listing
pub const RECENT_MESSAGES_LIMIT: usize = 50;

/// Log entry for one broadcast
///
/// Written once per dispatch and never modified. It deliberately carries no
/// per-recipient outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Unique identifier for the record
    pub id: Uuid,

    /// Message body that was broadcast
    pub text: String,

    /// Owning school (tenant)
    pub school_id: Uuid,

    /// Staff member who triggered the broadcast, when known
    pub sent_by: Option<Uuid>,

    /// Timestamp when the broadcast was recorded
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Creates a new broadcast record stamped with the current time
    pub fn new(text: impl Into<String>, school_id: Uuid, sent_by: Option<Uuid>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            school_id,
            sent_by,
            created_at: Utc::now(),
        }
    }
}
