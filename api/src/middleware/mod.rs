pub mod auth;
pub mod cors;

pub use auth::{RequireRole, SessionAuth, SessionContext};
pub use cors::create_cors;
