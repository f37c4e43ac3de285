//! Document store configuration module

use serde::{Deserialize, Serialize};

/// Which store adapter backs the repositories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// MongoDB document database
    Mongo,
    /// Process-local in-memory store (development and tests)
    Memory,
}

impl std::str::FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(StoreBackend::Mongo),
            "memory" | "in-memory" => Ok(StoreBackend::Memory),
            _ => Err(format!("Invalid store backend: {}", s)),
        }
    }
}

/// Document store configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Store adapter selection
    pub backend: StoreBackend,

    /// Database connection URL
    pub url: String,

    /// Database name holding all collections
    pub database_name: String,

    /// Connection timeout in seconds
    pub connect_timeout: u64,

    /// Deadline for writes and single-document reads, in seconds
    pub short_timeout: u64,

    /// Deadline for list reads, in seconds
    pub long_timeout: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Mongo,
            url: String::from("mongodb://localhost:27017"),
            database_name: String::from("customer_vendor_api"),
            connect_timeout: 10,
            short_timeout: 5,
            long_timeout: 30,
        }
    }
}

impl DatabaseConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let backend = std::env::var("STORE_BACKEND")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.backend);
        let url = std::env::var("DATABASE_URL")
            .or_else(|_| std::env::var("MONGODB_URI"))
            .unwrap_or(defaults.url);
        let database_name = std::env::var("DATABASE_NAME").unwrap_or(defaults.database_name);
        let connect_timeout = std::env::var("DATABASE_CONNECT_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.connect_timeout);

        Self {
            backend,
            url,
            database_name,
            connect_timeout,
            ..Default::default()
        }
    }

    /// In-memory configuration used by tests and local runs
    pub fn in_memory() -> Self {
        Self {
            backend: StoreBackend::Memory,
            ..Default::default()
        }
    }
}
