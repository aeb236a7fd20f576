//! Twilio messaging provider
//!
//! One API call per send. Errors from Twilio are passed through as
//! [`ProviderError`] text; retry policy belongs to the caller.

use async_trait::async_trait;
use tracing::{debug, info, warn};
use twilio::{Client, OutboundMessage};

use sc_core::errors::ProviderError;
use sc_core::services::broadcast::MessageProviderClient;
use sc_shared::phone::{has_country_code, mask_phone_number};

use crate::config::SmsConfig;
use crate::InfrastructureError;

/// Twilio credentials and sender
#[derive(Debug, Clone)]
pub struct TwilioConfig {
    /// Twilio Account SID
    pub account_sid: String,
    /// Twilio Auth Token
    pub auth_token: String,
    /// From phone number (must be a Twilio phone number)
    pub from_number: String,
}

impl TwilioConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        Self::from_sms_config(&SmsConfig::from_env())
    }

    /// Take the Twilio fields out of the generic SMS config
    pub fn from_sms_config(config: &SmsConfig) -> Result<Self, InfrastructureError> {
        if config.account_sid.trim().is_empty() {
            return Err(InfrastructureError::Config("TWILIO_ACCOUNT_SID not set".to_string()));
        }
        if config.auth_token.trim().is_empty() {
            return Err(InfrastructureError::Config("TWILIO_AUTH_TOKEN not set".to_string()));
        }
        if !has_country_code(&config.from_number) {
            return Err(InfrastructureError::Config(
                "TWILIO_PHONE_NUMBER must be in E.164 format (starting with '+')".to_string(),
            ));
        }

        Ok(Self {
            account_sid: config.account_sid.clone(),
            auth_token: config.auth_token.clone(),
            from_number: config.from_number.clone(),
        })
    }
}

/// Twilio-backed [`MessageProviderClient`]
pub struct TwilioMessageProvider {
    client: Client,
    config: TwilioConfig,
}

impl TwilioMessageProvider {
    pub fn new(config: TwilioConfig) -> Result<Self, InfrastructureError> {
        let client = Client::new(&config.account_sid, &config.auth_token);

        info!(
            "Twilio provider initialized with from number: {}",
            mask_phone_number(&config.from_number)
        );

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        Self::new(TwilioConfig::from_env()?)
    }

    pub fn from_number(&self) -> &str {
        &self.config.from_number
    }
}

#[async_trait]
impl MessageProviderClient for TwilioMessageProvider {
    async fn send(&self, body: &str, to: &str) -> Result<String, ProviderError> {
        debug!(
            "Sending SMS to {} via Twilio (message length: {} chars)",
            mask_phone_number(to),
            body.chars().count()
        );

        let msg = OutboundMessage::new(&self.config.from_number, to, body);
        match self.client.send_message(msg).await {
            Ok(response) => {
                info!("SMS sent to {} with SID: {}", mask_phone_number(to), response.sid);
                Ok(response.sid)
            }
            Err(e) => {
                warn!("Twilio rejected SMS to {}: {}", mask_phone_number(to), e);
                Err(ProviderError::new(e.to_string()))
            }
        }
    }

    fn provider_name(&self) -> &str {
        "Twilio"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sms_config(sid: &str, token: &str, from: &str) -> SmsConfig {
        SmsConfig {
            provider: "twilio".to_string(),
            account_sid: sid.to_string(),
            auth_token: token.to_string(),
            from_number: from.to_string(),
            ..SmsConfig::default()
        }
    }

    #[test]
    fn test_config_from_sms_config() {
        let config = TwilioConfig::from_sms_config(&sms_config("ACtest", "token", "+15551234567")).unwrap();
        assert_eq!(config.account_sid, "ACtest");
        assert_eq!(config.auth_token, "token");
        assert_eq!(config.from_number, "+15551234567");
    }

    #[test]
    fn test_config_requires_credentials() {
        let missing_sid = TwilioConfig::from_sms_config(&sms_config("", "token", "+15551234567"));
        assert!(missing_sid.unwrap_err().to_string().contains("TWILIO_ACCOUNT_SID"));

        let missing_token = TwilioConfig::from_sms_config(&sms_config("ACtest", " ", "+15551234567"));
        assert!(missing_token.unwrap_err().to_string().contains("TWILIO_AUTH_TOKEN"));
    }

    #[test]
    fn test_config_requires_e164_sender() {
        let result = TwilioConfig::from_sms_config(&sms_config("ACtest", "token", "15551234567"));
        assert!(result.unwrap_err().to_string().contains("E.164 format"));
    }

    #[test]
    fn test_provider_name() {
        let config = TwilioConfig::from_sms_config(&sms_config("ACtest", "token", "+15551234567")).unwrap();
        let provider = TwilioMessageProvider::new(config).unwrap();
        assert_eq!(provider.provider_name(), "Twilio");
        assert_eq!(provider.from_number(), "+15551234567");
    }
}
