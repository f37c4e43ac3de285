//! Authentication route handlers
//!
//! - Account signup
//! - OTP request and verification (phone login)

pub mod request_otp;
pub mod signup;
pub mod verify_otp;

pub use request_otp::request_otp;
pub use signup::signup;
pub use verify_otp::verify_otp;
