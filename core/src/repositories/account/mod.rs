//! Account repository module.

mod r#trait;
pub use r#trait::AccountRepository;

mod memory;
pub use memory::InMemoryAccountRepository;

#[cfg(test)]
mod tests;
