//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical business areas:
//! - `auth` - Session token signing and cookie configuration
//! - `database` - Document store connection and deadline configuration
//! - `environment` - Environment detection and logging configuration
//! - `server` - HTTP server and CORS configuration
//! - `sms` - SMS provider credentials
//!
//! Every section is loaded from environment variables once at startup and is
//! immutable afterwards.

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;
pub mod sms;

use serde::{Deserialize, Serialize};

pub use auth::{AuthConfig, JwtConfig, SessionConfig, DEFAULT_JWT_SECRET, SESSION_COOKIE_NAME};
pub use database::{DatabaseConfig, StoreBackend};
pub use environment::{Environment, LoggingConfig};
pub use server::{CorsConfig, ServerConfig};
pub use sms::{SmsConfig, SmsProvider};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Document store configuration
    pub database: DatabaseConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// SMS provider configuration
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
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            sms: SmsConfig::default(),
            cors: CorsConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(),
            sms: SmsConfig::from_env(),
            cors: CorsConfig::from_env(environment),
            logging: LoggingConfig::from_env(environment),
        }
    }

    /// Check the configuration for settings that must not reach production.
    ///
    /// Returns a list of problems; an empty list means the configuration is usable.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.environment.is_production() && self.auth.jwt.is_using_default_secret() {
            problems.push("JWT_SECRET_KEY must be set in production".to_string());
        }
        if self.auth.jwt.secret.is_empty() {
            problems.push("JWT_SECRET_KEY must not be empty".to_string());
        }
        if self.sms.provider == SmsProvider::Twilio && !self.sms.has_credentials() {
            problems.push(
                "TWILIO_ACCOUNT_SID, TWILIO_AUTH_TOKEN and TWILIO_PHONE_NUMBER are required for the twilio provider"
                    .to_string(),
            );
        }

        problems
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid_outside_production() {
        let config = AppConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_production_rejects_default_secret() {
        let config = AppConfig {
            environment: Environment::Production,
            ..AppConfig::default()
        };
        let problems = config.validate();
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("JWT_SECRET_KEY"));
    }

    #[test]
    fn test_twilio_requires_credentials() {
        let mut config = AppConfig::default();
        config.sms.provider = SmsProvider::Twilio;
        assert!(!config.validate().is_empty());
    }
}
