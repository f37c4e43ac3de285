//! Customer support chat threads and vendor broadcasts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record::Record;

/// A single message inside a chat thread
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub from_user_id: String,
    #[serde(default)]
    pub to_admin: bool,
    pub content: String,
    /// Assigned by the server when the message is sent
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

/// One thread per user, holding every message the user has sent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub admin_id: String,
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl Chat {
    /// Starts a thread for `user_id` with its first message
    pub fn start(id: String, user_id: String, first: Message) -> Self {
        Self {
            id,
            user_id,
            admin_id: String::new(),
            messages: vec![first],
        }
    }
}

impl Record for Chat {
    const COLLECTION: &'static str = "chats";
    const RESOURCE: &'static str = "Chat";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

/// Announcement sent by a vendor to every user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BroadcastMessage {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub admin_id: String,
    pub content: String,
    #[serde(default = "Utc::now")]
    pub timestamp: DateTime<Utc>,
}

impl Record for BroadcastMessage {
    const COLLECTION: &'static str = "broadcasts";
    const RESOURCE: &'static str = "Broadcast";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
