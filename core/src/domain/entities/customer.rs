//! Customer profile attached to an account and a store.

use serde::{Deserialize, Serialize};

use super::record::Record;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub store_id: String,
}

impl Record for Customer {
    const COLLECTION: &'static str = "customers";
    const RESOURCE: &'static str = "Customer";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
