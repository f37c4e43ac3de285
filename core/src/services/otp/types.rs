//! Types for OTP service results

/// Result of issuing and sending a code
#[derive(Debug, Clone)]
pub struct SendOtpResult {
    /// The SMS message ID from the provider
    pub message_id: String,
    /// Expiry of the issued code in epoch seconds
    pub expires_at: i64,
}
