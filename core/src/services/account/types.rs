//! Input types for account operations

use crate::domain::entities::account::Role;

/// Validated signup input
#[derive(Debug, Clone)]
pub struct SignupRequest {
    pub username: String,
    /// Plaintext password, hashed before storage
    pub password: String,
    pub role: Role,
    pub phone_number: String,
}
