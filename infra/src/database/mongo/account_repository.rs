//! MongoDB implementation of AccountRepository

use async_trait::async_trait;
use cv_core::domain::entities::Account;
use cv_core::errors::DomainError;
use cv_core::repositories::AccountRepository;
use mongodb::bson::{doc, Document};
use mongodb::Collection;

use crate::database::connection::{
    with_deadline, MongoConnection, OperationDeadlines, ACCOUNTS_COLLECTION,
};
use crate::database::documents::{from_stored, to_stored};
use crate::InfrastructureError;

use super::is_duplicate_key;

/// Account repository backed by the `users` collection
pub struct MongoAccountRepository {
    collection: Collection<Document>,
    deadlines: OperationDeadlines,
}

impl MongoAccountRepository {
    pub fn new(connection: &MongoConnection) -> Self {
        Self {
            collection: connection.database().collection(ACCOUNTS_COLLECTION),
            deadlines: connection.deadlines(),
        }
    }

    async fn find_one(&self, filter: Document) -> Result<Option<Account>, DomainError> {
        let found = with_deadline(
            "users.find_one",
            self.deadlines.short,
            self.collection.find_one(filter, None),
        )
        .await?;

        match found {
            Some(document) => Ok(Some(from_stored(document)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl AccountRepository for MongoAccountRepository {
    async fn find_by_phone(&self, phone_number: &str) -> Result<Option<Account>, DomainError> {
        self.find_one(doc! { "phone_number": phone_number }).await
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let document = to_stored(&account)?;
        let insert = self.collection.insert_one(document, None);

        match tokio::time::timeout(self.deadlines.short, insert).await {
            Ok(Ok(_)) => {
                tracing::debug!(account_id = %account.id, "Account stored");
                Ok(account)
            }
            Ok(Err(e)) if is_duplicate_key(&e) => Err(DomainError::Conflict {
                message: "Phone number already registered".to_string(),
            }),
            Ok(Err(e)) => Err(InfrastructureError::Database(e).into()),
            Err(_) => Err(InfrastructureError::Timeout("users.insert_one".to_string()).into()),
        }
    }

    async fn update_otp(
        &self,
        phone_number: &str,
        otp: &str,
        expires_at: i64,
    ) -> Result<bool, DomainError> {
        let result = with_deadline(
            "users.update_otp",
            self.deadlines.short,
            self.collection.update_one(
                doc! { "phone_number": phone_number },
                doc! { "$set": { "otp": otp, "otp_expires_at": expires_at } },
                None,
            ),
        )
        .await?;

        Ok(result.matched_count > 0)
    }
}
