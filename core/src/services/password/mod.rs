//! Password hashing with bcrypt

use crate::errors::{AuthError, DomainError};

/// Hashes and checks signup passwords
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Hasher using the given bcrypt cost factor
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Salted bcrypt hash of `password`
    pub fn hash(&self, password: &str) -> Result<String, DomainError> {
        bcrypt::hash(password, self.cost).map_err(|e| {
            tracing::error!(error = %e, event = "password_hash_failed", "Failed to hash password");
            DomainError::Auth(AuthError::PasswordHashingFailed)
        })
    }

    /// Whether `password` matches `hash`. Unparseable hashes never match.
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        bcrypt::verify(password, hash).unwrap_or(false)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}
