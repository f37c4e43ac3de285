use serde::Deserialize;
use validator::Validate;

/// `?id=` selector for single-record routes
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct IdQuery {
    #[validate(length(min = 1, message = "id is required"))]
    pub id: String,
}

/// `?user_id=` filter for per-user listings
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UserIdQuery {
    #[validate(length(min = 1, message = "user_id is required"))]
    pub user_id: String,
}

/// `?order_id=` selector for order cancellation
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct OrderIdQuery {
    #[validate(length(min = 1, message = "order_id is required"))]
    pub order_id: String,
}
