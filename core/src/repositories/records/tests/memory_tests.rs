//! Unit tests for the in-memory record repository

use serde_json::json;

use std::sync::Arc;

use chrono::{TimeZone, Utc};

use crate::domain::entities::{Chat, Message, Order, OrderStatus, Store};
use crate::errors::DomainError;
use crate::repositories::records::{InMemoryRecordRepository, RecordRepository};

fn store(id: &str, name: &str) -> Store {
    Store {
        id: id.to_string(),
        name: name.to_string(),
    }
}

fn order(id: &str, user_id: &str) -> Order {
    Order {
        id: id.to_string(),
        user_id: user_id.to_string(),
        store_id: "s1".to_string(),
        product: "tea".to_string(),
        quantity: 1,
        order_status: OrderStatus::Pending,
        creation_date: 0,
    }
}

#[tokio::test]
async fn test_insert_and_find_all_in_order() {
    let repo = InMemoryRecordRepository::<Store>::new();
    repo.insert(store("a", "First")).await.unwrap();
    repo.insert(store("b", "Second")).await.unwrap();

    let all = repo.find_all().await.unwrap();
    let names: Vec<_> = all.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["First", "Second"]);
}

#[tokio::test]
async fn test_insert_duplicate_id() {
    let repo = InMemoryRecordRepository::<Store>::new();
    repo.insert(store("a", "First")).await.unwrap();
    let result = repo.insert(store("a", "Again")).await;
    assert!(matches!(result, Err(DomainError::Conflict { .. })));
}

#[tokio::test]
async fn test_find_by_field() {
    let repo = InMemoryRecordRepository::<Order>::new();
    repo.insert(order("o1", "u1")).await.unwrap();
    repo.insert(order("o2", "u2")).await.unwrap();
    repo.insert(order("o3", "u1")).await.unwrap();

    let orders = repo.find_by_field("user_id", "u1").await.unwrap();
    let ids: Vec<_> = orders.iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["o1", "o3"]);

    assert!(repo.find_by_field("user_id", "nobody").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_replace_keeps_id() {
    let repo = InMemoryRecordRepository::<Store>::new();
    repo.insert(store("a", "Old")).await.unwrap();

    assert!(repo.replace("a", store("", "New")).await.unwrap());
    let found = repo.find_by_id("a").await.unwrap().unwrap();
    assert_eq!(found, store("a", "New"));

    assert!(!repo.replace("missing", store("", "X")).await.unwrap());
}

#[tokio::test]
async fn test_set_field() {
    let repo = InMemoryRecordRepository::<Order>::new();
    repo.insert(order("o1", "u1")).await.unwrap();

    assert!(repo
        .set_field("o1", "order_status", json!("Cancelled"))
        .await
        .unwrap());
    let found = repo.find_by_id("o1").await.unwrap().unwrap();
    assert_eq!(found.order_status, OrderStatus::Cancelled);

    let invalid = repo.set_field("o1", "order_status", json!("Lost")).await;
    assert!(matches!(invalid, Err(DomainError::Validation { .. })));

    assert!(!repo
        .set_field("missing", "order_status", json!("Cancelled"))
        .await
        .unwrap());
}

fn message(content: &str) -> Message {
    Message {
        id: content.to_string(),
        from_user_id: "u1".to_string(),
        to_admin: true,
        content: content.to_string(),
        timestamp: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
    }
}

#[tokio::test]
async fn test_append_to_field() {
    let repo = InMemoryRecordRepository::<Chat>::new();
    repo.insert(Chat::start("c1".to_string(), "u1".to_string(), message("hello")))
        .await
        .unwrap();

    let value = serde_json::to_value(message("again")).unwrap();
    assert!(repo.append_to_field("c1", "messages", value.clone()).await.unwrap());
    assert!(!repo.append_to_field("missing", "messages", value).await.unwrap());

    let chat = repo.find_by_id("c1").await.unwrap().unwrap();
    let contents: Vec<_> = chat.messages.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents, vec!["hello", "again"]);

    let not_a_list = repo.append_to_field("c1", "user_id", json!("x")).await;
    assert!(matches!(not_a_list, Err(DomainError::Validation { .. })));
}

#[tokio::test]
async fn test_concurrent_appends_all_land() {
    let repo = Arc::new(InMemoryRecordRepository::<Chat>::new());
    repo.insert(Chat::start("c1".to_string(), "u1".to_string(), message("first")))
        .await
        .unwrap();

    let mut handles = Vec::new();
    for i in 0..20 {
        let repo = Arc::clone(&repo);
        handles.push(tokio::spawn(async move {
            let value = serde_json::to_value(message(&format!("m{}", i))).unwrap();
            repo.append_to_field("c1", "messages", value).await.unwrap()
        }));
    }
    for handle in handles {
        assert!(handle.await.unwrap());
    }

    let chat = repo.find_by_id("c1").await.unwrap().unwrap();
    assert_eq!(chat.messages.len(), 21);
}

#[tokio::test]
async fn test_delete() {
    let repo = InMemoryRecordRepository::<Store>::new();
    repo.insert(store("a", "Shop")).await.unwrap();

    assert!(repo.delete("a").await.unwrap());
    assert!(!repo.delete("a").await.unwrap());
    assert!(repo.find_by_id("a").await.unwrap().is_none());
}
