//! Authentication and session cookie configuration

use serde::{Deserialize, Serialize};

/// Secret used when `JWT_SECRET_KEY` is not set. Only acceptable outside production.
pub const DEFAULT_JWT_SECRET: &str = "development-secret-please-change-in-production";

/// Name of the cookie carrying the session token
pub const SESSION_COOKIE_NAME: &str = "token";

/// Session token signing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Symmetric secret used to sign and verify session tokens
    pub secret: String,

    /// Algorithm for JWT signing (default: HS256)
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_JWT_SECRET),
            algorithm: default_algorithm(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_JWT_SECRET
    }
}

/// Session cookie configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Cookie secure flag (HTTPS only)
    #[serde(default)]
    pub secure: bool,

    /// Cookie HttpOnly flag
    #[serde(default)]
    pub http_only: bool,
}

impl SessionConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            secure: env_flag("SESSION_COOKIE_SECURE"),
            http_only: env_flag("SESSION_COOKIE_HTTP_ONLY"),
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Session cookie configuration
    #[serde(default)]
    pub session: SessionConfig,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let jwt_secret = std::env::var("JWT_SECRET_KEY")
            .or_else(|_| std::env::var("JWT_SECRET"))
            .unwrap_or_else(|_| DEFAULT_JWT_SECRET.to_string());

        Self {
            jwt: JwtConfig {
                secret: jwt_secret,
                algorithm: default_algorithm(),
            },
            session: SessionConfig::from_env(),
        }
    }
}

fn default_algorithm() -> String {
    String::from("HS256")
}

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(false)
}
