//! Token service module for session JWTs
//!
//! Issues HS256-signed session tokens carrying the username and role, and
//! verifies them with a clear split between malformed, badly signed and
//! expired tokens.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
