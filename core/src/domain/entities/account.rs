//! Account entity representing a registered customer or vendor.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ValidationError;

use super::record::new_record_id;

/// Role carried by an account and by its session claims
///
/// Parsing is case-insensitive, so `"Vendor"` and `"vendor"` name the same role.
/// The canonical serialized form is lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Role {
    /// A shopper placing orders
    Customer,
    /// A store operator with access to vendor-only routes
    Vendor,
}

impl Role {
    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Vendor => "vendor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.eq_ignore_ascii_case("customer") {
            Ok(Role::Customer)
        } else if value.eq_ignore_ascii_case("vendor") {
            Ok(Role::Vendor)
        } else {
            Err(ValidationError::UnknownRole {
                value: s.to_string(),
            })
        }
    }
}

impl TryFrom<String> for Role {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Account entity
///
/// `password` only ever holds a bcrypt hash. `otp` is empty until the first
/// code is requested, and `otp_expires_at` is epoch seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier, stored as the document `_id`
    pub id: String,

    pub username: String,

    /// Bcrypt hash of the signup password
    pub password: String,

    pub role: Role,

    /// Unique phone number used for OTP login
    pub phone_number: String,

    /// Most recently issued one-time code
    #[serde(default)]
    pub otp: String,

    /// Expiry of `otp` in epoch seconds
    #[serde(default)]
    pub otp_expires_at: i64,
}

impl Account {
    /// Creates a new account with a fresh id and no OTP state
    pub fn new(username: String, password_hash: String, role: Role, phone_number: String) -> Self {
        Self {
            id: new_record_id(),
            username,
            password: password_hash,
            role,
            phone_number,
            otp: String::new(),
            otp_expires_at: 0,
        }
    }

    /// Whether a code has ever been issued for this account
    pub fn has_otp(&self) -> bool {
        !self.otp.is_empty()
    }

    /// Whether the stored code is past its expiry at `now` (epoch seconds)
    pub fn otp_expired_at(&self, now: i64) -> bool {
        now > self.otp_expires_at
    }
}
