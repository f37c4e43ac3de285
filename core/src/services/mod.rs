//! Business services containing domain logic and use cases.

pub mod access;
pub mod account;
pub mod clock;
pub mod otp;
pub mod password;
pub mod token;

// Re-export commonly used types
pub use access::authorize;
pub use account::{AccountService, SignupRequest};
pub use clock::{Clock, ManualClock, SystemClock};
pub use otp::{OtpService, OtpServiceConfig, SendOtpResult, SmsServiceTrait};
pub use password::PasswordHasher;
pub use token::{TokenService, TokenServiceConfig};
