//! In-memory implementation of RecordRepository

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::record::Record;
use crate::errors::DomainError;

use super::r#trait::RecordRepository;

/// In-memory record repository preserving insertion order
pub struct InMemoryRecordRepository<T: Record> {
    records: Arc<RwLock<Vec<T>>>,
}

impl<T: Record> InMemoryRecordRepository<T> {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<T: Record> Default for InMemoryRecordRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Clone for InMemoryRecordRepository<T> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

fn field_matches<T: Record>(record: &T, field: &str, value: &str) -> bool {
    match serde_json::to_value(record) {
        Ok(json) => json.get(field).and_then(|v| v.as_str()) == Some(value),
        Err(_) => false,
    }
}

fn with_field<T: Record>(
    record: &T,
    field: &str,
    value: serde_json::Value,
) -> Result<T, DomainError> {
    let mut json = serde_json::to_value(record).map_err(|e| DomainError::internal(e.to_string()))?;
    match json.as_object_mut() {
        Some(object) => {
            object.insert(field.to_string(), value);
        }
        None => {
            return Err(DomainError::internal(format!(
                "{} is not stored as an object",
                T::RESOURCE
            )))
        }
    }
    serde_json::from_value(json).map_err(|e| DomainError::Validation {
        message: format!("Invalid value for field {}: {}", field, e),
    })
}

fn with_appended<T: Record>(
    record: &T,
    field: &str,
    value: serde_json::Value,
) -> Result<T, DomainError> {
    let mut json = serde_json::to_value(record).map_err(|e| DomainError::internal(e.to_string()))?;
    match json.get_mut(field) {
        Some(serde_json::Value::Array(items)) => items.push(value),
        _ => {
            return Err(DomainError::Validation {
                message: format!("Field {} of {} is not a list", field, T::RESOURCE),
            })
        }
    }
    serde_json::from_value(json).map_err(|e| DomainError::Validation {
        message: format!("Invalid value for field {}: {}", field, e),
    })
}

#[async_trait]
impl<T: Record> RecordRepository<T> for InMemoryRecordRepository<T> {
    async fn insert(&self, record: T) -> Result<T, DomainError> {
        let mut records = self.records.write().await;
        if records.iter().any(|r| r.id() == record.id()) {
            return Err(DomainError::Conflict {
                message: format!("{} {} already exists", T::RESOURCE, record.id()),
            });
        }
        records.push(record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<T>, DomainError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id() == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<T>, DomainError> {
        Ok(self.records.read().await.clone())
    }

    async fn find_by_field(&self, field: &str, value: &str) -> Result<Vec<T>, DomainError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|r| field_matches(*r, field, value))
            .cloned()
            .collect())
    }

    async fn replace(&self, id: &str, mut record: T) -> Result<bool, DomainError> {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|r| r.id() == id) {
            Some(slot) => {
                record.set_id(id.to_string());
                *slot = record;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn set_field(
        &self,
        id: &str,
        field: &str,
        value: serde_json::Value,
    ) -> Result<bool, DomainError> {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|r| r.id() == id) {
            Some(slot) => {
                *slot = with_field(slot, field, value)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn append_to_field(
        &self,
        id: &str,
        field: &str,
        value: serde_json::Value,
    ) -> Result<bool, DomainError> {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|r| r.id() == id) {
            Some(slot) => {
                *slot = with_appended(slot, field, value)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|r| r.id() != id);
        Ok(records.len() < before)
    }
}
