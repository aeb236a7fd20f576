//! Mock messaging provider for development and testing
//!
//! Logs messages instead of sending them.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use sc_core::errors::ProviderError;
use sc_core::services::broadcast::MessageProviderClient;
use sc_shared::phone::mask_phone_number;

/// Mock provider returning `mock_<uuid>` ids
#[derive(Clone)]
pub struct MockMessageProvider {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Reject every send (for testing failure paths)
    simulate_failure: bool,
}

impl MockMessageProvider {
    pub fn new() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: false,
        }
    }

    /// A provider that rejects every send
    pub fn failing() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: true,
        }
    }

    /// Total number of accepted messages
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    pub fn reset_counter(&self) {
        self.message_count.store(0, Ordering::SeqCst);
    }

    pub fn set_simulate_failure(&mut self, simulate: bool) {
        self.simulate_failure = simulate;
    }
}

impl Default for MockMessageProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageProviderClient for MockMessageProvider {
    async fn send(&self, body: &str, to: &str) -> Result<String, ProviderError> {
        let masked = mask_phone_number(to);

        if self.simulate_failure {
            warn!(provider = "mock", phone = %masked, "Mock provider simulating failure");
            return Err(ProviderError::new("Simulated SMS sending failure"));
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        info!(
            target: "sms_service",
            provider = "mock",
            phone = %masked,
            message_id = %message_id,
            message_number = count,
            body_length = body.chars().count(),
            "Mock SMS sent"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}
