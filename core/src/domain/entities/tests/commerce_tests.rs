//! Unit tests for commerce record entities

use crate::domain::entities::{Chat, Customer, Message, Order, OrderStatus, Record};

#[test]
fn test_order_place_forces_pending_and_timestamp() {
    let order: Order = serde_json::from_value(serde_json::json!({
        "user_id": "u1",
        "store_id": "s1",
        "product": "coffee",
        "quantity": 2,
        "order_status": "Delivered",
        "creation_date": 5
    }))
    .unwrap();

    let placed = order.place("o1".to_string(), 1_700_000_000);

    assert_eq!(placed.id, "o1");
    assert_eq!(placed.order_status, OrderStatus::Pending);
    assert_eq!(placed.creation_date, 1_700_000_000);
    assert_eq!(placed.quantity, 2);
}

#[test]
fn test_order_status_wire_names() {
    assert_eq!(
        serde_json::to_string(&OrderStatus::Cancelled).unwrap(),
        "\"Cancelled\""
    );
    assert_eq!(OrderStatus::Pending.as_str(), "Pending");
}

#[test]
fn test_customer_body_without_ids() {
    let mut customer: Customer = serde_json::from_value(serde_json::json!({
        "first_name": "Ada",
        "last_name": "Lovelace"
    }))
    .unwrap();
    assert_eq!(customer.id(), "");

    customer.set_id("c1".to_string());
    assert_eq!(customer.id(), "c1");
    assert_eq!(Customer::COLLECTION, "customers");
}

#[test]
fn test_chat_start_holds_first_message() {
    let message: Message = serde_json::from_value(serde_json::json!({
        "from_user_id": "u1",
        "content": "hello"
    }))
    .unwrap();

    let chat = Chat::start("c1".to_string(), "u1".to_string(), message.clone());
    assert_eq!(chat.messages, vec![message]);
    assert_eq!(chat.user_id, "u1");
}
