use serde::{Deserialize, Serialize};
use validator::Validate;

/// Longest message accepted by `POST /sms/send`, one GSM segment
pub const MAX_MESSAGE_LENGTH: u64 = 160;

/// Body of `POST /sms/send`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendSmsRequest {
    #[validate(length(min = 1, max = 160))]
    pub message: String,

    /// Explicit recipients; every contact of the school when absent
    #[serde(default)]
    pub recipients: Option<Vec<String>>,
}
