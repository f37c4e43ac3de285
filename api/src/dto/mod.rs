pub mod auth;
pub mod commerce;

pub use auth::{RequestOtpRequest, SignupRequest, VerifyOtpRequest};
pub use commerce::{IdQuery, OrderIdQuery, UserIdQuery};
