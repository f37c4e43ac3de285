//! Generic repository for commerce records (customers, stores, orders, feeds, chats).

mod r#trait;
pub use r#trait::RecordRepository;

mod memory;
pub use memory::InMemoryRecordRepository;

#[cfg(test)]
mod tests;
