//! Configuration for the token service

use std::str::FromStr;

use cv_shared::JwtConfig;
use jsonwebtoken::Algorithm;

use crate::errors::DomainError;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm (HMAC family only)
    pub algorithm: Algorithm,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: cv_shared::config::DEFAULT_JWT_SECRET.to_string(),
            algorithm: Algorithm::HS256,
        }
    }
}

impl TokenServiceConfig {
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            ..Default::default()
        }
    }

    /// Build from the process-wide JWT configuration
    pub fn from_jwt_config(config: &JwtConfig) -> Result<Self, DomainError> {
        let algorithm = Algorithm::from_str(&config.algorithm).map_err(|_| DomainError::Validation {
            message: format!("Unsupported JWT algorithm: {}", config.algorithm),
        })?;

        if !matches!(algorithm, Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512) {
            return Err(DomainError::Validation {
                message: format!("Session tokens require an HMAC algorithm, got {}", config.algorithm),
            });
        }

        Ok(Self {
            jwt_secret: config.secret.clone(),
            algorithm,
        })
    }
}
