//! SMS provider configuration

use serde::{Deserialize, Serialize};

/// SMS delivery provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SmsProvider {
    /// Twilio programmable messaging
    Twilio,
    /// Log messages instead of sending them
    Mock,
}

impl std::str::FromStr for SmsProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "twilio" => Ok(SmsProvider::Twilio),
            "mock" | "console" => Ok(SmsProvider::Mock),
            _ => Err(format!("Invalid SMS provider: {}", s)),
        }
    }
}

/// SMS service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmsConfig {
    /// SMS service provider
    pub provider: SmsProvider,
    /// Twilio Account SID
    #[serde(default)]
    pub account_sid: String,
    /// Twilio Auth Token
    #[serde(default)]
    pub auth_token: String,
    /// Sender phone number (E.164)
    #[serde(default)]
    pub from_number: String,
    /// Deadline for a single send, in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            provider: SmsProvider::Mock,
            account_sid: String::new(),
            auth_token: String::new(),
            from_number: String::new(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl SmsConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let provider = std::env::var("SMS_PROVIDER")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(SmsProvider::Mock);

        Self {
            provider,
            account_sid: std::env::var("TWILIO_ACCOUNT_SID").unwrap_or_default(),
            auth_token: std::env::var("TWILIO_AUTH_TOKEN").unwrap_or_default(),
            from_number: std::env::var("TWILIO_PHONE_NUMBER")
                .or_else(|_| std::env::var("TWILIO_FROM_NUMBER"))
                .unwrap_or_default(),
            request_timeout_secs: std::env::var("SMS_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_request_timeout),
        }
    }

    /// Whether all provider credentials are present
    pub fn has_credentials(&self) -> bool {
        !self.account_sid.is_empty() && !self.auth_token.is_empty() && !self.from_number.is_empty()
    }
}

fn default_request_timeout() -> u64 {
    5
}
