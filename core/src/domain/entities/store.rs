//! Store entity.

use serde::{Deserialize, Serialize};

use super::record::Record;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    #[serde(default)]
    pub id: String,
    pub name: String,
}

impl Record for Store {
    const COLLECTION: &'static str = "stores";
    const RESOURCE: &'static str = "Store";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
