//! Record repository trait shared by every commerce collection.

use async_trait::async_trait;

use crate::domain::entities::record::Record;
use crate::errors::DomainError;

/// Repository trait for documents of one collection
///
/// Field names passed to `find_by_field`, `set_field` and `append_to_field` are the serialized
/// field names of `T`. The field `id` addresses the record id.
#[async_trait]
pub trait RecordRepository<T: Record>: Send + Sync {
    /// Store a new record. The record id must already be assigned.
    async fn insert(&self, record: T) -> Result<T, DomainError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<T>, DomainError>;

    /// All records in insertion order
    async fn find_all(&self) -> Result<Vec<T>, DomainError>;

    /// Records whose string field `field` equals `value`
    async fn find_by_field(&self, field: &str, value: &str) -> Result<Vec<T>, DomainError>;

    /// Replace the stored record with this id, keeping the id
    ///
    /// Returns `false` when no record has this id.
    async fn replace(&self, id: &str, record: T) -> Result<bool, DomainError>;

    /// Overwrite a single field of the record with this id
    ///
    /// Returns `false` when no record has this id.
    async fn set_field(
        &self,
        id: &str,
        field: &str,
        value: serde_json::Value,
    ) -> Result<bool, DomainError>;

    /// Append `value` to the list field `field` of the record with this id
    ///
    /// The append happens in the store, so concurrent appends to the same
    /// record all land. Returns `false` when no record has this id.
    async fn append_to_field(
        &self,
        id: &str,
        field: &str,
        value: serde_json::Value,
    ) -> Result<bool, DomainError>;

    /// Returns `false` when no record has this id.
    async fn delete(&self, id: &str) -> Result<bool, DomainError>;
}
