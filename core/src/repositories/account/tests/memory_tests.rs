//! Unit tests for the in-memory account repository

use crate::domain::entities::account::{Account, Role};
use crate::errors::DomainError;
use crate::repositories::account::{AccountRepository, InMemoryAccountRepository};

fn account(phone: &str) -> Account {
    Account::new(
        "alice".to_string(),
        "$2b$12$hash".to_string(),
        Role::Customer,
        phone.to_string(),
    )
}

#[tokio::test]
async fn test_create_and_find() {
    let repo = InMemoryAccountRepository::new();
    let created = repo.create(account("+15550001111")).await.unwrap();

    let by_phone = repo.find_by_phone("+15550001111").await.unwrap();
    assert_eq!(by_phone, Some(created));
}

#[tokio::test]
async fn test_find_missing_phone() {
    let repo = InMemoryAccountRepository::new();
    assert!(repo.find_by_phone("+15550009999").await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_phone_conflicts() {
    let repo = InMemoryAccountRepository::new();
    repo.create(account("+15550001111")).await.unwrap();

    let result = repo.create(account("+15550001111")).await;
    assert!(matches!(result, Err(DomainError::Conflict { .. })));
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn test_update_otp_writes_code_and_expiry() {
    let repo = InMemoryAccountRepository::new();
    repo.create(account("+15550001111")).await.unwrap();

    assert!(repo.update_otp("+15550001111", "042042", 1_000).await.unwrap());
    let stored = repo.find_by_phone("+15550001111").await.unwrap().unwrap();
    assert_eq!(stored.otp, "042042");
    assert_eq!(stored.otp_expires_at, 1_000);

    // Last write wins
    assert!(repo.update_otp("+15550001111", "777777", 2_000).await.unwrap());
    let stored = repo.find_by_phone("+15550001111").await.unwrap().unwrap();
    assert_eq!(stored.otp, "777777");
    assert_eq!(stored.otp_expires_at, 2_000);
}

#[tokio::test]
async fn test_update_otp_unknown_phone() {
    let repo = InMemoryAccountRepository::new();
    assert!(!repo.update_otp("+15550001111", "123456", 1_000).await.unwrap());
}
