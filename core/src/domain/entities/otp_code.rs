//! One-time code issued for phone login.

use rand::{rngs::OsRng, Rng};

/// Number of digits in a code
pub const CODE_LENGTH: usize = 6;

/// Lifetime of a code (5 minutes)
pub const OTP_EXPIRATION_SECONDS: i64 = 5 * 60;

/// A generated code and the instant it stops being accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpCode {
    /// Zero-padded decimal code, always `CODE_LENGTH` ASCII digits
    pub code: String,

    /// Expiry in epoch seconds
    pub expires_at: i64,
}

impl OtpCode {
    /// Generates a uniformly random code from the OS CSPRNG, expiring `ttl_seconds` after `now`
    pub fn generate(now: i64, ttl_seconds: i64) -> Self {
        let n: u32 = OsRng.gen_range(0..1_000_000);
        Self {
            code: format!("{:06}", n),
            expires_at: now + ttl_seconds,
        }
    }
}
