//! # Infrastructure Layer
//!
//! Concrete implementations of the collaborators the core depends on:
//!
//! - **Database**: MongoDB document store adapters for accounts and commerce records
//! - **SMS**: SMS delivery providers (Twilio, console mock)
//! - **Factory**: selection of store backend and SMS provider from configuration
//!
//! ## Features
//!
//! - `mongo`: Enable the MongoDB store adapters (default)
//! - `twilio-sms`: Enable the Twilio SMS provider (default)

use cv_core::errors::DomainError;

/// Database module - MongoDB implementations
#[cfg(feature = "mongo")]
pub mod database;

/// SMS service module - External SMS providers
pub mod sms;

/// Backend selection from configuration
pub mod factory;

pub use factory::{create_repositories, create_sms_service, Repositories};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Document store error
    #[cfg(feature = "mongo")]
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// A store or provider call exceeded its deadline
    #[error("Operation timed out: {0}")]
    Timeout(String),

    /// Document could not be converted to or from its stored form
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// SMS service error
    #[error("SMS service error: {0}")]
    Sms(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        match err {
            InfrastructureError::Timeout(operation) => DomainError::Timeout { operation },
            other => DomainError::Internal {
                message: other.to_string(),
            },
        }
    }
}
