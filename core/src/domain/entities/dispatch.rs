//! Per-recipient dispatch results and the broadcast report built from them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome of sending to one recipient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DispatchOutcome {
    /// The provider accepted the message
    Sent {
        /// Identifier assigned by the provider
        message_id: String,
    },
    /// The provider rejected the message or could not be reached
    Failed {
        /// Provider error text
        error: String,
    },
}

/// Result entry for one recipient, in input order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchResult {
    /// Phone number as submitted by the caller
    pub recipient: String,

    /// Number actually handed to the provider
    pub normalized: String,

    #[serde(flatten)]
    pub outcome: DispatchOutcome,
}

impl DispatchResult {
    pub fn sent(recipient: impl Into<String>, normalized: impl Into<String>, message_id: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            normalized: normalized.into(),
            outcome: DispatchOutcome::Sent {
                message_id: message_id.into(),
            },
        }
    }

    pub fn failed(recipient: impl Into<String>, normalized: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            normalized: normalized.into(),
            outcome: DispatchOutcome::Failed {
                error: error.into(),
            },
        }
    }

    pub fn is_sent(&self) -> bool {
        matches!(self.outcome, DispatchOutcome::Sent { .. })
    }

    /// Provider message id, if the send succeeded
    pub fn message_id(&self) -> Option<&str> {
        match &self.outcome {
            DispatchOutcome::Sent { message_id } => Some(message_id),
            DispatchOutcome::Failed { .. } => None,
        }
    }

    /// Error text, if the send failed
    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            DispatchOutcome::Sent { .. } => None,
            DispatchOutcome::Failed { error } => Some(error),
        }
    }
}

/// Succeeded/failed counts of one broadcast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BroadcastSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl BroadcastSummary {
    pub fn from_results(results: &[DispatchResult]) -> Self {
        let succeeded = results.iter().filter(|r| r.is_sent()).count();
        Self {
            total: results.len(),
            succeeded,
            failed: results.len() - succeeded,
        }
    }
}

/// What the caller gets back from a recorded broadcast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BroadcastReport {
    /// Id of the stored broadcast record
    pub message_id: Uuid,

    pub summary: BroadcastSummary,

    pub results: Vec<DispatchResult>,
}

impl BroadcastReport {
    pub fn new(message_id: Uuid, results: Vec<DispatchResult>) -> Self {
        Self {
            message_id,
            summary: BroadcastSummary::from_results(&results),
            results,
        }
    }
}
