//! Shared utilities and common types for the customer/vendor server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error response structures
//! - Utility functions (phone validation, masking)
//! - Health check response

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CorsConfig, DatabaseConfig, Environment, JwtConfig, LoggingConfig,
    ServerConfig, SessionConfig, SmsConfig, SmsProvider, StoreBackend, SESSION_COOKIE_NAME,
};
pub use errors::{error_codes, ErrorResponse};
pub use types::HealthResponse;
pub use utils::phone;
