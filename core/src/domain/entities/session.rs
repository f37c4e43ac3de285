//! Session claims carried inside the signed `token` cookie.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::account::Role;

/// Lifetime of a session token (24 hours)
pub const SESSION_TTL_SECONDS: i64 = 24 * 60 * 60;

/// Claims structure for the session JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub username: String,

    pub role: Role,

    /// Expiration timestamp (epoch seconds)
    pub exp: i64,

    /// Issued at timestamp (epoch seconds)
    #[serde(default)]
    pub iat: i64,
}

impl SessionClaims {
    /// Creates claims issued at `issued_at` that expire `SESSION_TTL_SECONDS` later
    pub fn new(username: impl Into<String>, role: Role, issued_at: i64) -> Self {
        Self {
            username: username.into(),
            role,
            exp: issued_at.saturating_add(SESSION_TTL_SECONDS),
            iat: issued_at,
        }
    }

    /// A token is valid while `now <= exp`
    pub fn is_expired_at(&self, now: i64) -> bool {
        now > self.exp
    }

    /// Expiry as a UTC timestamp, used for the cookie `Expires` attribute
    pub fn expires_at(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.exp, 0)
            .single()
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }
}

/// A freshly signed session token together with the claims it carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub claims: SessionClaims,
}
