//! Domain entities representing core business objects.

pub mod account;
pub mod chat;
pub mod customer;
pub mod feed;
pub mod order;
pub mod otp_code;
pub mod record;
pub mod session;
pub mod store;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use account::{Account, Role};
pub use chat::{BroadcastMessage, Chat, Message};
pub use customer::Customer;
pub use feed::Feed;
pub use order::{Order, OrderStatus, ORDER_STATUS_FIELD};
pub use otp_code::{OtpCode, CODE_LENGTH, OTP_EXPIRATION_SECONDS};
pub use record::{new_record_id, Record};
pub use session::{IssuedToken, SessionClaims, SESSION_TTL_SECONDS};
pub use store::Store;
