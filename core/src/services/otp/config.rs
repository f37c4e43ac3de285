//! Configuration for the OTP service

use crate::domain::entities::otp_code::OTP_EXPIRATION_SECONDS;

/// Configuration for the OTP service
#[derive(Debug, Clone)]
pub struct OtpServiceConfig {
    /// Seconds before an issued code stops being accepted
    pub code_ttl_seconds: i64,
    /// Text placed before the code in the SMS body
    pub message_prefix: String,
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self {
            code_ttl_seconds: OTP_EXPIRATION_SECONDS,
            message_prefix: "Your OTP is: ".to_string(),
        }
    }
}

impl OtpServiceConfig {
    /// SMS body carrying `code`
    pub fn message_for(&self, code: &str) -> String {
        format!("{}{}", self.message_prefix, code)
    }
}
