//! Domain-specific error types for authentication, session tokens and input validation

use thiserror::Error;

/// Authentication-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid phone format: {phone}")]
    InvalidPhoneFormat { phone: String },

    #[error("User not found")]
    AccountNotFound,

    #[error("An account with this phone number already exists")]
    AccountAlreadyExists,

    #[error("Invalid or expired OTP")]
    InvalidOrExpiredOtp,

    #[error("Failed to send OTP")]
    OtpDeliveryFailed,

    #[error("Unauthorized")]
    MissingSession,

    #[error("Forbidden")]
    InsufficientRole { required: String },

    #[error("Failed to hash password")]
    PasswordHashingFailed,
}

/// Session token errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// The token could not be parsed as a JWT at all
    #[error("Malformed session token")]
    Malformed,

    /// The token parsed but its signature does not match the process secret
    #[error("Invalid session token")]
    InvalidSignature,

    /// The token is well formed and signed but its expiry has passed
    #[error("Session token expired")]
    Expired,

    #[error("Failed to generate session token")]
    GenerationFailed,
}

/// Validation errors for request input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field required: {field}")]
    RequiredField { field: String },

    #[error("Invalid format for field: {field}")]
    InvalidFormat { field: String },

    #[error("Unknown role: {value}")]
    UnknownRole { value: String },
}
