//! Messaging provider configuration

use serde::{Deserialize, Serialize};

/// Prefix prepended to numbers stored without a country calling code
pub const DEFAULT_COUNTRY_CODE: &str = "+91";

/// SMS provider configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmsConfig {
    /// SMS service provider ("twilio", "mock")
    pub provider: String,
    /// Provider account identifier (Twilio account SID)
    pub account_sid: String,
    /// Provider auth token
    pub auth_token: String,
    /// Sender phone number
    pub from_number: String,
    /// Country calling code added to numbers without a leading `+`
    #[serde(default = "default_country_code")]
    pub default_country_code: String,
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            provider: "mock".to_string(),
            account_sid: String::new(),
            auth_token: String::new(),
            from_number: "+10000000000".to_string(),
            default_country_code: default_country_code(),
        }
    }
}

impl SmsConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            provider: std::env::var("SMS_PROVIDER").unwrap_or(defaults.provider),
            account_sid: std::env::var("TWILIO_ACCOUNT_SID").unwrap_or_default(),
            auth_token: std::env::var("TWILIO_AUTH_TOKEN").unwrap_or_default(),
            from_number: std::env::var("TWILIO_PHONE_NUMBER").unwrap_or(defaults.from_number),
            default_country_code: std::env::var("SMS_DEFAULT_COUNTRY_CODE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.default_country_code),
        }
    }
}

fn default_country_code() -> String {
    DEFAULT_COUNTRY_CODE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sms_config_default() {
        let config = SmsConfig::default();
        assert_eq!(config.provider, "mock");
        assert_eq!(config.default_country_code, "+91");
    }

    #[test]
    fn test_missing_country_code_uses_default() {
        let config: SmsConfig = serde_json::from_str(
            r#"{"provider":"twilio","account_sid":"AC1","auth_token":"t","from_number":"+15550001111"}"#,
        )
        .unwrap();
        assert_eq!(config.default_country_code, DEFAULT_COUNTRY_CODE);
    }
}
