//! OTP service module for phone-based login
//!
//! - Code generation and delivery over SMS
//! - Code verification against the account record
//! - Session token issuance on success

mod config;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::OtpServiceConfig;
pub use service::OtpService;
pub use traits::SmsServiceTrait;
pub use types::SendOtpResult;
