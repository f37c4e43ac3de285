//! Backend and provider selection from configuration

use std::sync::Arc;
use std::time::Duration;

use cv_core::domain::entities::{BroadcastMessage, Chat, Customer, Feed, Order, Store};
use cv_core::repositories::{
    AccountRepository, InMemoryAccountRepository, InMemoryRecordRepository, RecordRepository,
};
use cv_core::services::otp::SmsServiceTrait;
use cv_shared::{DatabaseConfig, SmsConfig, SmsProvider, StoreBackend};

use crate::sms::{MockSmsService, SmsService, SmsServiceAdapter};
use crate::InfrastructureError;

/// Every repository the application needs, behind trait objects
#[derive(Clone)]
pub struct Repositories {
    pub accounts: Arc<dyn AccountRepository>,
    pub customers: Arc<dyn RecordRepository<Customer>>,
    pub stores: Arc<dyn RecordRepository<Store>>,
    pub orders: Arc<dyn RecordRepository<Order>>,
    pub feeds: Arc<dyn RecordRepository<Feed>>,
    pub chats: Arc<dyn RecordRepository<Chat>>,
    pub broadcasts: Arc<dyn RecordRepository<BroadcastMessage>>,
}

impl Repositories {
    /// Process-local repositories, used for tests and local runs
    pub fn in_memory() -> Self {
        Self {
            accounts: Arc::new(InMemoryAccountRepository::new()),
            customers: Arc::new(InMemoryRecordRepository::<Customer>::new()),
            stores: Arc::new(InMemoryRecordRepository::<Store>::new()),
            orders: Arc::new(InMemoryRecordRepository::<Order>::new()),
            feeds: Arc::new(InMemoryRecordRepository::<Feed>::new()),
            chats: Arc::new(InMemoryRecordRepository::<Chat>::new()),
            broadcasts: Arc::new(InMemoryRecordRepository::<BroadcastMessage>::new()),
        }
    }

    /// Repositories backed by MongoDB collections
    #[cfg(feature = "mongo")]
    pub fn mongo(connection: &crate::database::MongoConnection) -> Self {
        use crate::database::{MongoAccountRepository, MongoRecordRepository};

        Self {
            accounts: Arc::new(MongoAccountRepository::new(connection)),
            customers: Arc::new(MongoRecordRepository::<Customer>::new(connection)),
            stores: Arc::new(MongoRecordRepository::<Store>::new(connection)),
            orders: Arc::new(MongoRecordRepository::<Order>::new(connection)),
            feeds: Arc::new(MongoRecordRepository::<Feed>::new(connection)),
            chats: Arc::new(MongoRecordRepository::<Chat>::new(connection)),
            broadcasts: Arc::new(MongoRecordRepository::<BroadcastMessage>::new(connection)),
        }
    }
}

/// Build the repositories for the configured store backend
pub async fn create_repositories(
    config: &DatabaseConfig,
) -> Result<Repositories, InfrastructureError> {
    match config.backend {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; data is lost on restart");
            Ok(Repositories::in_memory())
        }
        #[cfg(feature = "mongo")]
        StoreBackend::Mongo => {
            let connection = crate::database::MongoConnection::new(config).await?;
            Ok(Repositories::mongo(&connection))
        }
        #[cfg(not(feature = "mongo"))]
        StoreBackend::Mongo => Err(InfrastructureError::Config(
            "MongoDB support is not enabled in this build".to_string(),
        )),
    }
}

/// Build the SMS sender for the configured provider
///
/// Every provider is wrapped in a [`SmsServiceAdapter`] that bounds each send
/// by `request_timeout_secs`.
pub fn create_sms_service(
    config: &SmsConfig,
) -> Result<Arc<dyn SmsServiceTrait>, InfrastructureError> {
    let provider: Box<dyn SmsService> = match config.provider {
        SmsProvider::Mock => {
            tracing::warn!("Using mock SMS provider; codes are printed to the console");
            Box::new(MockSmsService::new())
        }
        #[cfg(feature = "twilio-sms")]
        SmsProvider::Twilio => {
            let twilio_config = crate::sms::TwilioConfig::from_sms_config(config)?;
            Box::new(crate::sms::TwilioSmsService::new(twilio_config))
        }
        #[cfg(not(feature = "twilio-sms"))]
        SmsProvider::Twilio => {
            return Err(InfrastructureError::Config(
                "Twilio support is not enabled in this build".to_string(),
            ))
        }
    };

    tracing::info!(provider = provider.provider_name(), "SMS provider ready");
    Ok(Arc::new(SmsServiceAdapter::new(
        provider,
        Duration::from_secs(config.request_timeout_secs),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cv_core::domain::entities::{new_record_id, Account, Role};

    #[tokio::test]
    async fn test_memory_backend_builds_working_repositories() {
        let repos = create_repositories(&DatabaseConfig::in_memory())
            .await
            .unwrap();

        let account = Account::new(
            "alice".to_string(),
            "hash".to_string(),
            Role::Customer,
            "+15550001111".to_string(),
        );
        repos.accounts.create(account).await.unwrap();
        assert!(repos
            .accounts
            .find_by_phone("+15550001111")
            .await
            .unwrap()
            .is_some());

        let store = Store {
            id: new_record_id(),
            name: "Corner Shop".to_string(),
        };
        repos.stores.insert(store).await.unwrap();
        assert_eq!(repos.stores.find_all().await.unwrap().len(), 1);
    }
}
