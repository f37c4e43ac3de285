//! Account signup service

mod service;
mod types;


pub use service::AccountService;
pub use types::SignupRequest;
