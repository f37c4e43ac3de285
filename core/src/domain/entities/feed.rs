//! Feed post published by a user.

use serde::{Deserialize, Serialize};

use super::record::Record;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feed {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    pub content: String,
    /// Epoch seconds, assigned by the server on create
    #[serde(default)]
    pub created_at: i64,
}

impl Record for Feed {
    const COLLECTION: &'static str = "feeds";
    const RESOURCE: &'static str = "Feed";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
