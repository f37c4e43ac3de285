//! Generic MongoDB implementation of RecordRepository

use std::marker::PhantomData;

use async_trait::async_trait;
use cv_core::domain::entities::Record;
use cv_core::errors::DomainError;
use cv_core::repositories::RecordRepository;
use futures_util::TryStreamExt;
use mongodb::bson::{self, doc, Document};
use mongodb::Collection;

use crate::database::connection::{with_deadline, MongoConnection, OperationDeadlines};
use crate::database::documents::{from_stored, stored_field, to_stored};

use super::is_duplicate_key;

/// Repository for one commerce collection, named by `T::COLLECTION`
pub struct MongoRecordRepository<T: Record> {
    collection: Collection<Document>,
    deadlines: OperationDeadlines,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> MongoRecordRepository<T> {
    pub fn new(connection: &MongoConnection) -> Self {
        Self {
            collection: connection.database().collection(T::COLLECTION),
            deadlines: connection.deadlines(),
            _record: PhantomData,
        }
    }

    fn operation(name: &str) -> String {
        format!("{}.{}", T::COLLECTION, name)
    }

    async fn find_many(&self, filter: Document) -> Result<Vec<T>, DomainError> {
        let operation = Self::operation("find");
        let query = async {
            let cursor = self.collection.find(filter, None).await?;
            cursor.try_collect::<Vec<Document>>().await
        };
        let documents = with_deadline(&operation, self.deadlines.long, query).await?;

        documents
            .into_iter()
            .map(|document| from_stored(document).map_err(DomainError::from))
            .collect()
    }
}

#[async_trait]
impl<T: Record> RecordRepository<T> for MongoRecordRepository<T> {
    async fn insert(&self, record: T) -> Result<T, DomainError> {
        let document = to_stored(&record)?;
        let operation = Self::operation("insert_one");

        match tokio::time::timeout(
            self.deadlines.short,
            self.collection.insert_one(document, None),
        )
        .await
        {
            Ok(Ok(_)) => Ok(record),
            Ok(Err(e)) if is_duplicate_key(&e) => Err(DomainError::Conflict {
                message: format!("{} {} already exists", T::RESOURCE, record.id()),
            }),
            Ok(Err(e)) => Err(crate::InfrastructureError::Database(e).into()),
            Err(_) => Err(crate::InfrastructureError::Timeout(operation).into()),
        }
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<T>, DomainError> {
        let operation = Self::operation("find_one");
        let found = with_deadline(
            &operation,
            self.deadlines.short,
            self.collection.find_one(doc! { "_id": id }, None),
        )
        .await?;

        match found {
            Some(document) => Ok(Some(from_stored(document)?)),
            None => Ok(None),
        }
    }

    async fn find_all(&self) -> Result<Vec<T>, DomainError> {
        self.find_many(doc! {}).await
    }

    async fn find_by_field(&self, field: &str, value: &str) -> Result<Vec<T>, DomainError> {
        let mut filter = Document::new();
        filter.insert(stored_field(field), value);
        self.find_many(filter).await
    }

    async fn replace(&self, id: &str, mut record: T) -> Result<bool, DomainError> {
        record.set_id(id.to_string());
        let document = to_stored(&record)?;
        let operation = Self::operation("replace_one");

        let result = with_deadline(
            &operation,
            self.deadlines.short,
            self.collection.replace_one(doc! { "_id": id }, document, None),
        )
        .await?;

        Ok(result.matched_count > 0)
    }

    async fn set_field(
        &self,
        id: &str,
        field: &str,
        value: serde_json::Value,
    ) -> Result<bool, DomainError> {
        let value = bson::to_bson(&value).map_err(|e| DomainError::Validation {
            message: format!("Invalid value for field {}: {}", field, e),
        })?;
        let mut update = Document::new();
        update.insert(stored_field(field), value);
        let operation = Self::operation("update_one");

        let result = with_deadline(
            &operation,
            self.deadlines.short,
            self.collection
                .update_one(doc! { "_id": id }, doc! { "$set": update }, None),
        )
        .await?;

        Ok(result.matched_count > 0)
    }

    async fn append_to_field(
        &self,
        id: &str,
        field: &str,
        value: serde_json::Value,
    ) -> Result<bool, DomainError> {
        let value = bson::to_bson(&value).map_err(|e| DomainError::Validation {
            message: format!("Invalid value for field {}: {}", field, e),
        })?;
        let mut update = Document::new();
        update.insert(stored_field(field), value);
        let operation = Self::operation("update_one");

        let result = with_deadline(
            &operation,
            self.deadlines.short,
            self.collection
                .update_one(doc! { "_id": id }, doc! { "$push": update }, None),
        )
        .await?;

        Ok(result.matched_count > 0)
    }

    async fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let operation = Self::operation("delete_one");
        let result = with_deadline(
            &operation,
            self.deadlines.short,
            self.collection.delete_one(doc! { "_id": id }, None),
        )
        .await?;

        Ok(result.deleted_count > 0)
    }
}
