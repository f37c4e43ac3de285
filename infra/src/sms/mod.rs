//! SMS Service Module
//!
//! SMS delivery for one-time login codes.
//!
//! ## Features
//!
//! - **SMS Service Trait**: Common interface for all SMS providers
//! - **Mock Implementation**: Console output for development
//! - **Twilio Support**: Production SMS via the Twilio API
//! - **Core Adapter**: Bridges any provider to the core OTP service with a send deadline
//! - **Security**: Phone number masking in logs

pub mod mock_sms;
pub mod sms_service;
pub mod trait_adapter;

// Twilio SMS service (feature-gated)
#[cfg(feature = "twilio-sms")]
pub mod twilio;

// Re-export commonly used types
pub use mock_sms::MockSmsService;
pub use sms_service::{is_valid_phone_number, mask_phone_number, SmsService};
pub use trait_adapter::SmsServiceAdapter;

#[cfg(feature = "twilio-sms")]
pub use twilio::{TwilioConfig, TwilioSmsService};

#[cfg(test)]
mod tests;
