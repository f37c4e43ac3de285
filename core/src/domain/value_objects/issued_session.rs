//! Result of a successful phone login.

use chrono::{DateTime, Utc};

use crate::domain::entities::{IssuedToken, Role};

/// Session handed back to the HTTP layer after OTP verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedSession {
    /// Id of the account that logged in
    pub account_id: String,

    /// Signed token and its claims
    pub token: IssuedToken,
}

impl IssuedSession {
    pub fn new(account_id: String, token: IssuedToken) -> Self {
        Self { account_id, token }
    }

    /// The signed JWT to place in the session cookie
    pub fn token_value(&self) -> &str {
        &self.token.token
    }

    pub fn username(&self) -> &str {
        &self.token.claims.username
    }

    pub fn role(&self) -> Role {
        self.token.claims.role
    }

    /// When the cookie and the token stop being accepted
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.token.claims.expires_at()
    }
}
