//! Order entity and its lifecycle status.

use serde::{Deserialize, Serialize};

use super::record::Record;

/// Field name of the status in stored documents
pub const ORDER_STATUS_FIELD: &str = "order_status";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Pending,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub store_id: String,
    pub product: String,
    pub quantity: i32,
    #[serde(default)]
    pub order_status: OrderStatus,
    /// Epoch seconds, assigned by the server on create
    #[serde(default)]
    pub creation_date: i64,
}

impl Order {
    /// Resets server-owned fields for a newly placed order
    pub fn place(mut self, id: String, now: i64) -> Self {
        self.id = id;
        self.order_status = OrderStatus::Pending;
        self.creation_date = now;
        self
    }
}

impl Record for Order {
    const COLLECTION: &'static str = "orders";
    const RESOURCE: &'static str = "Order";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
