//! In-memory implementation of AccountRepository for tests and local runs

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

use super::r#trait::AccountRepository;

/// In-memory account repository keyed by account id
#[derive(Clone)]
pub struct InMemoryAccountRepository {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
}

impl InMemoryAccountRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored accounts
    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

impl Default for InMemoryAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn find_by_phone(&self, phone_number: &str) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .values()
            .find(|a| a.phone_number == phone_number)
            .cloned())
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;

        if accounts
            .values()
            .any(|a| a.phone_number == account.phone_number)
        {
            return Err(DomainError::Conflict {
                message: "Phone number already registered".to_string(),
            });
        }

        accounts.insert(account.id.clone(), account.clone());
        Ok(account)
    }

    async fn update_otp(
        &self,
        phone_number: &str,
        otp: &str,
        expires_at: i64,
    ) -> Result<bool, DomainError> {
        let mut accounts = self.accounts.write().await;
        match accounts
            .values_mut()
            .find(|a| a.phone_number == phone_number)
        {
            Some(account) => {
                account.otp = otp.to_string();
                account.otp_expires_at = expires_at;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
