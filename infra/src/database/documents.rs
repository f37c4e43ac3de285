//! Conversion between domain records and stored documents
//!
//! Domain types carry their key as `id`; stored documents carry it as `_id`.

use mongodb::bson::{self, Document};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::InfrastructureError;

/// Stored name of a domain field
pub fn stored_field(field: &str) -> &str {
    if field == "id" {
        "_id"
    } else {
        field
    }
}

/// Serialize a domain value into its stored document
pub fn to_stored<T: Serialize>(value: &T) -> Result<Document, InfrastructureError> {
    let mut document =
        bson::to_document(value).map_err(|e| InfrastructureError::Serialization(e.to_string()))?;
    if let Some(id) = document.remove("id") {
        document.insert("_id", id);
    }
    Ok(document)
}

/// Deserialize a stored document into its domain value
pub fn from_stored<T: DeserializeOwned>(mut document: Document) -> Result<T, InfrastructureError> {
    if let Some(id) = document.remove("_id") {
        document.insert("id", id);
    }
    bson::from_document(document).map_err(|e| InfrastructureError::Serialization(e.to_string()))
}
