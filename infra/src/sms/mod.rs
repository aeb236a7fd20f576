//! SMS provider module
//!
//! Implementations of [`MessageProviderClient`] plus a factory that picks one
//! from [`SmsConfig`]. Phone numbers are masked in every log line.

use std::sync::Arc;

use sc_core::services::broadcast::MessageProviderClient;

use crate::config::SmsConfig;

pub mod mock;

// Twilio provider (feature-gated)
#[cfg(feature = "twilio-sms")]
pub mod twilio;

pub use mock::MockMessageProvider;
pub use sc_shared::phone::mask_phone_number;

#[cfg(feature = "twilio-sms")]
pub use twilio::{TwilioConfig, TwilioMessageProvider};


/// Create a messaging provider based on configuration
///
/// `SMS_PROVIDER=twilio` selects Twilio; anything else, or a Twilio setup
/// with missing credentials, falls back to the mock provider.
pub fn create_message_provider(config: &SmsConfig) -> Arc<dyn MessageProviderClient> {
    match config.provider.to_lowercase().as_str() {
        "mock" => Arc::new(MockMessageProvider::new()),
        #[cfg(feature = "twilio-sms")]
        "twilio" => match TwilioConfig::from_sms_config(config).and_then(TwilioMessageProvider::new) {
            Ok(provider) => Arc::new(provider),
            Err(e) => {
                tracing::error!("Failed to initialize Twilio provider: {}", e);
                tracing::warn!("Falling back to mock SMS provider");
                Arc::new(MockMessageProvider::new())
            }
        },
        other => {
            tracing::warn!("Unknown SMS provider '{}', using mock implementation", other);
            Arc::new(MockMessageProvider::new())
        }
    }
}
