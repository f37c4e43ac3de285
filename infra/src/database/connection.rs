//! MongoDB client connection management

use std::future::Future;
use std::time::Duration;

use cv_core::errors::DomainError;
use cv_shared::DatabaseConfig;
use mongodb::bson::doc;
use mongodb::options::{ClientOptions, IndexOptions};
use mongodb::{Client, Database, IndexModel};

use crate::InfrastructureError;

/// Collection holding accounts
pub const ACCOUNTS_COLLECTION: &str = "users";

/// Deadlines applied to individual store operations
#[derive(Debug, Clone, Copy)]
pub struct OperationDeadlines {
    /// Writes and single-document reads
    pub short: Duration,
    /// Multi-document reads
    pub long: Duration,
}

impl OperationDeadlines {
    pub fn from_config(config: &DatabaseConfig) -> Self {
        Self {
            short: Duration::from_secs(config.short_timeout),
            long: Duration::from_secs(config.long_timeout),
        }
    }
}

/// Run a driver call under a deadline
///
/// A call that exceeds `limit` fails with `DomainError::Timeout` naming `operation`.
pub(crate) async fn with_deadline<T, F>(
    operation: &str,
    limit: Duration,
    call: F,
) -> Result<T, DomainError>
where
    F: Future<Output = Result<T, mongodb::error::Error>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => {
            tracing::error!(operation = operation, error = %e, event = "store_error", "Document store call failed");
            Err(InfrastructureError::Database(e).into())
        }
        Err(_) => {
            tracing::error!(
                operation = operation,
                timeout_ms = limit.as_millis() as u64,
                event = "store_timeout",
                "Document store call exceeded deadline"
            );
            Err(InfrastructureError::Timeout(operation.to_string()).into())
        }
    }
}

/// Handle to the application database
#[derive(Clone)]
pub struct MongoConnection {
    client: Client,
    database: Database,
    deadlines: OperationDeadlines,
}

impl MongoConnection {
    /// Connect to MongoDB using the configured URL and database name
    ///
    /// The driver connects lazily; this call parses options, builds the client
    /// and creates the unique phone number index on the accounts collection.
    pub async fn new(config: &DatabaseConfig) -> Result<Self, InfrastructureError> {
        tracing::info!(database = %config.database_name, "Connecting to MongoDB");

        let mut options = ClientOptions::parse(&config.url)
            .await
            .map_err(|e| InfrastructureError::Config(format!("Invalid database URL: {}", e)))?;
        options.app_name = Some("customer-vendor-api".to_string());
        options.connect_timeout = Some(Duration::from_secs(config.connect_timeout));
        options.server_selection_timeout = Some(Duration::from_secs(config.connect_timeout));

        let client = Client::with_options(options)?;
        let database = client.database(&config.database_name);

        let connection = Self {
            client,
            database,
            deadlines: OperationDeadlines::from_config(config),
        };
        connection.ensure_indexes().await?;

        tracing::info!("MongoDB connection established");
        Ok(connection)
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn deadlines(&self) -> OperationDeadlines {
        self.deadlines
    }

    async fn ensure_indexes(&self) -> Result<(), InfrastructureError> {
        let index = IndexModel::builder()
            .keys(doc! { "phone_number": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.database
            .collection::<mongodb::bson::Document>(ACCOUNTS_COLLECTION)
            .create_index(index, None)
            .await?;
        Ok(())
    }
}
