//! Twilio SMS Service Implementation
//!
//! Sends SMS through the Twilio API. Each message is attempted once; the
//! caller decides what a failure means.

use async_trait::async_trait;
use cv_shared::SmsConfig;
use phonenumber::{Mode, PhoneNumber};
use tracing::{debug, error, info};
use twilio::{Client, OutboundMessage};

use crate::sms::sms_service::{mask_phone_number, SmsService};
use crate::InfrastructureError;

/// Maximum SMS body length accepted by Twilio
const MAX_MESSAGE_LENGTH: usize = 1600;

/// Twilio SMS service configuration
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
    /// Build from the shared SMS configuration
    pub fn from_sms_config(config: &SmsConfig) -> Result<Self, InfrastructureError> {
        if !config.has_credentials() {
            return Err(InfrastructureError::Config(
                "TWILIO_ACCOUNT_SID, TWILIO_AUTH_TOKEN and TWILIO_PHONE_NUMBER must be set".to_string(),
            ));
        }

        if !config.from_number.starts_with('+') {
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

/// Twilio SMS service implementation
pub struct TwilioSmsService {
    client: Client,
    config: TwilioConfig,
}

impl TwilioSmsService {
    /// Create a new Twilio SMS service
    pub fn new(config: TwilioConfig) -> Self {
        let client = Client::new(&config.account_sid, &config.auth_token);

        info!(
            from = %mask_phone_number(&config.from_number),
            "Twilio SMS service initialized"
        );

        Self { client, config }
    }

    /// Validate and normalize phone number to E.164 format
    fn validate_phone_number(&self, phone: &str) -> Result<String, InfrastructureError> {
        if !phone.starts_with('+') {
            return Err(InfrastructureError::Sms(
                "Phone number must be in E.164 format (e.g., +14155552671)".to_string(),
            ));
        }

        match phone.parse::<PhoneNumber>() {
            Ok(parsed) => {
                let formatted = parsed.format().mode(Mode::E164).to_string();
                debug!(phone = %mask_phone_number(&formatted), "Validated phone number");
                Ok(formatted)
            }
            Err(e) => {
                error!(phone = %mask_phone_number(phone), error = %e, "Invalid phone number format");
                Err(InfrastructureError::Sms(format!(
                    "Invalid phone number format: {}",
                    e
                )))
            }
        }
    }
}

#[async_trait]
impl SmsService for TwilioSmsService {
    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<String, InfrastructureError> {
        let normalized_phone = self.validate_phone_number(phone_number)?;

        if message.len() > MAX_MESSAGE_LENGTH {
            return Err(InfrastructureError::Sms(format!(
                "Message exceeds maximum length of {} characters",
                MAX_MESSAGE_LENGTH
            )));
        }

        let msg = OutboundMessage::new(&self.config.from_number, &normalized_phone, message);

        match self.client.send_message(msg).await {
            Ok(response) => {
                info!(
                    provider = "twilio",
                    phone = %mask_phone_number(&normalized_phone),
                    sid = %response.sid,
                    "SMS sent successfully"
                );
                Ok(response.sid)
            }
            Err(e) => {
                error!(
                    provider = "twilio",
                    phone = %mask_phone_number(&normalized_phone),
                    error = %e,
                    "Failed to send SMS"
                );
                Err(InfrastructureError::Sms(format!("Twilio send failed: {}", e)))
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
    use cv_shared::SmsProvider;

    fn sms_config(from_number: &str) -> SmsConfig {
        SmsConfig {
            provider: SmsProvider::Twilio,
            account_sid: "ACtest".to_string(),
            auth_token: "test_token".to_string(),
            from_number: from_number.to_string(),
            request_timeout_secs: 5,
        }
    }

    #[test]
    fn test_phone_validation() {
        let service = TwilioSmsService::new(TwilioConfig::from_sms_config(&sms_config("+15551234567")).unwrap());

        assert_eq!(
            service.validate_phone_number("+14155552671").unwrap(),
            "+14155552671"
        );
        assert!(service.validate_phone_number("4155552671").is_err());
    }

    #[test]
    fn test_config_requires_e164_sender() {
        let result = TwilioConfig::from_sms_config(&sms_config("15551234567"));
        assert!(result.unwrap_err().to_string().contains("E.164 format"));
    }

    #[test]
    fn test_config_requires_credentials() {
        let mut config = sms_config("+15551234567");
        config.auth_token.clear();
        assert!(matches!(
            TwilioConfig::from_sms_config(&config),
            Err(InfrastructureError::Config(_))
        ));
    }

    #[tokio::test]
    async fn test_rejects_oversized_message() {
        let service = TwilioSmsService::new(TwilioConfig::from_sms_config(&sms_config("+15551234567")).unwrap());
        let body = "x".repeat(MAX_MESSAGE_LENGTH + 1);
        let result = service.send_sms("+14155552671", &body).await;
        assert!(result.unwrap_err().to_string().contains("maximum length"));
    }
}
