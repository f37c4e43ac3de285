//! Database module - MongoDB implementations
//!
//! This module provides the document store access layer:
//! - Client connection and health checks
//! - Per-operation deadlines
//! - Account and commerce record repositories

pub mod connection;
pub mod documents;
pub mod mongo;


// Re-export commonly used types
pub use connection::{MongoConnection, OperationDeadlines};
pub use mongo::{MongoAccountRepository, MongoRecordRepository};
