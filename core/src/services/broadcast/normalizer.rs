//! Phone normalization applied right before a number is handed to the provider

use sc_shared::config::sms::DEFAULT_COUNTRY_CODE;
use sc_shared::phone::has_country_code;

/// Canonicalizes raw phone strings into a dialable `+<code><number>` form
///
/// Numbers that already start with `+` are returned unchanged. Anything else
/// gets the configured prefix prepended once. No digit-count or character
/// validation happens here; malformed numbers are left for the provider to
/// reject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNormalizer {
    default_prefix: String,
}

impl PhoneNormalizer {
    pub fn new(default_prefix: impl Into<String>) -> Self {
        Self {
            default_prefix: default_prefix.into(),
        }
    }

    pub fn default_prefix(&self) -> &str {
        &self.default_prefix
    }

    pub fn normalize(&self, raw: &str) -> String {
        if has_country_code(raw) {
            raw.to_string()
        } else {
            format!("{}{}", self.default_prefix, raw)
        }
    }
}

impl Default for PhoneNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_COUNTRY_CODE)
    }
}
