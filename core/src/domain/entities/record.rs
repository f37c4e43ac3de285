//! Common contract for documents kept in a named collection.

use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

/// A document persisted in its own collection, keyed by a string id
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Collection (table) name in the document store
    const COLLECTION: &'static str;

    /// Human-readable name used in not-found errors
    const RESOURCE: &'static str;

    fn id(&self) -> &str;

    fn set_id(&mut self, id: String);
}

/// Generate a new server-side record id
pub fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}
