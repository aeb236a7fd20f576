//! Dashboard statistics value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Counters shown on the staff dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_contacts: u64,
    pub total_messages: u64,
    /// Time of the most recent broadcast, `None` before the first one
    pub last_message_time: Option<DateTime<Utc>>,
}
