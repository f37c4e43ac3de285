//! Repository interfaces for persistence, with in-memory implementations.

pub mod account;
pub mod records;

pub use account::{AccountRepository, InMemoryAccountRepository};
pub use records::{InMemoryRecordRepository, RecordRepository};
