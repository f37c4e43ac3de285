//! Account repository trait defining the interface for credential persistence.

use async_trait::async_trait;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

/// Repository trait for Account persistence operations
///
/// Implementations are expected to keep `phone_number` unique and to write
/// the OTP code and its expiry in a single document update.
///
/// # Example
/// ```no_run
/// # use cv_core::repositories::AccountRepository;
/// # async fn example(repo: &impl AccountRepository) -> Result<(), Box<dyn std::error::Error>> {
/// if let Some(account) = repo.find_by_phone("+15550001111").await? {
///     repo.update_otp(&account.phone_number, "123456", 1_700_000_300).await?;
/// }
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by its phone number
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account uses this phone number
    /// * `Err(DomainError)` - Store failure or timeout
    async fn find_by_phone(&self, phone_number: &str) -> Result<Option<Account>, DomainError>;

    /// Persist a new account
    ///
    /// # Returns
    /// * `Ok(Account)` - The stored account
    /// * `Err(DomainError::Conflict)` - The phone number is already registered
    async fn create(&self, account: Account) -> Result<Account, DomainError>;

    /// Overwrite the OTP code and expiry of the account with this phone number
    ///
    /// Both fields are written together. Concurrent calls for the same phone
    /// are last-write-wins.
    ///
    /// # Returns
    /// * `Ok(true)` - An account matched and was updated
    /// * `Ok(false)` - No account uses this phone number
    async fn update_otp(
        &self,
        phone_number: &str,
        otp: &str,
        expires_at: i64,
    ) -> Result<bool, DomainError>;
}
