//! Value objects representing immutable domain concepts.

pub mod issued_session;

// Re-export commonly used types
pub use issued_session::IssuedSession;
