//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Bearer token verification
//! - `database` - Database connection, pool and store selection
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server and CORS configuration
//! - `sms` - Messaging provider credentials and phone normalization

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;
pub mod sms;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::AuthConfig;
pub use database::{DatabaseConfig, StoreKind};
pub use environment::{Environment, LoggingConfig};
pub use server::{CorsConfig, ServerConfig};
pub use sms::SmsConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Backing store for contacts and broadcast records
    #[serde(default)]
    pub store: StoreKind,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Messaging provider configuration
    pub sms: SmsConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            store: StoreKind::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            sms: SmsConfig::default(),
            cors: CorsConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Every section falls back to its defaults when a variable is missing.
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            store: StoreKind::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(),
            sms: SmsConfig::from_env(),
            cors: if environment.is_production() {
                CorsConfig::from_env()
            } else {
                CorsConfig::development()
            },
            logging: LoggingConfig::for_environment(environment),
        }
    }

    /// Check settings that must not keep their development defaults in production
    pub fn validate(&self) -> Result<(), String> {
        if self.environment.is_production() {
            if self.auth.is_using_default_secret() {
                return Err("JWT_SECRET must be set in production".to_string());
            }
            if self.store == StoreKind::Memory {
                return Err("STORE=memory is not allowed in production".to_string());
            }
            if self.sms.provider == "mock" {
                return Err("SMS_PROVIDER=mock is not allowed in production".to_string());
            }
        }
        Ok(())
    }
}
