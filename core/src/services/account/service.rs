//! Account service implementation

use std::sync::Arc;

use cv_shared::phone::mask_phone_number;

use crate::domain::entities::account::Account;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::AccountRepository;
use crate::services::password::PasswordHasher;

use super::types::SignupRequest;

/// Creates accounts with bcrypt-hashed passwords
pub struct AccountService<R: AccountRepository + ?Sized> {
    account_repository: Arc<R>,
    hasher: PasswordHasher,
}

impl<R: AccountRepository + ?Sized> AccountService<R> {
    pub fn new(account_repository: Arc<R>, hasher: PasswordHasher) -> Self {
        Self {
            account_repository,
            hasher,
        }
    }

    /// Register a new account
    ///
    /// # Returns
    ///
    /// * `Ok(Account)` - The stored account, with the password replaced by its hash
    /// * `Err(DomainError::Auth(AuthError::AccountAlreadyExists))` - Phone number already registered
    /// * `Err(DomainError)` - Hashing or store failure
    pub async fn signup(&self, request: SignupRequest) -> DomainResult<Account> {
        let masked = mask_phone_number(&request.phone_number);

        if self
            .account_repository
            .find_by_phone(&request.phone_number)
            .await?
            .is_some()
        {
            tracing::info!(phone = %masked, event = "signup_duplicate_phone", "Phone number already registered");
            return Err(AuthError::AccountAlreadyExists.into());
        }

        let password_hash = self.hasher.hash(&request.password)?;
        let account = Account::new(
            request.username,
            password_hash,
            request.role,
            request.phone_number,
        );

        let created = self
            .account_repository
            .create(account)
            .await
            .map_err(|e| match e {
                DomainError::Conflict { .. } => DomainError::Auth(AuthError::AccountAlreadyExists),
                other => other,
            })?;

        tracing::info!(
            account_id = %created.id,
            role = %created.role,
            phone = %masked,
            event = "account_created",
            "Account created"
        );

        Ok(created)
    }
}
