//! SMS Service Interface
//!
//! Defines the trait for SMS providers.

use async_trait::async_trait;

use crate::InfrastructureError;

pub use cv_shared::phone::mask_phone_number;

/// SMS service trait for sending text messages
///
/// Implementations include:
/// - Twilio SMS API
/// - Mock implementation for development
#[async_trait]
pub trait SmsService: Send + Sync {
    /// Send an SMS message to a phone number
    ///
    /// # Arguments
    ///
    /// * `phone_number` - The recipient's phone number (E.164 format)
    /// * `message` - The message content to send
    ///
    /// # Returns
    ///
    /// * `Ok(message_id)` - Unique identifier for the sent message
    /// * `Err(InfrastructureError)` - If sending fails
    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<String, InfrastructureError>;

    /// Get the service provider name (e.g., "Twilio", "Mock")
    fn provider_name(&self) -> &str;
}

/// Validate phone number format (E.164)
pub fn is_valid_phone_number(phone: &str) -> bool {
    match phone.strip_prefix('+') {
        Some(digits) => {
            digits.chars().all(|c| c.is_ascii_digit())
                && cv_shared::phone::is_valid_international_phone(phone)
        }
        None => false,
    }
}
