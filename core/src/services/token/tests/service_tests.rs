//! Unit tests for the token service

use std::sync::Arc;

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};

use cv_shared::AuthConfig;

use crate::domain::entities::account::Role;
use crate::domain::entities::session::SessionClaims;
use crate::errors::TokenError;
use crate::services::clock::ManualClock;
use crate::services::token::{TokenService, TokenServiceConfig};

const ISSUED_AT: i64 = 1_700_000_000;

fn service_at(clock: Arc<ManualClock>) -> TokenService {
    TokenService::with_clock(TokenServiceConfig::new("test-secret"), clock)
}

#[test]
fn test_issue_and_verify() {
    let clock = Arc::new(ManualClock::new(ISSUED_AT));
    let service = service_at(clock);

    let issued = service.issue("alice", Role::Vendor).unwrap();
    assert_eq!(issued.claims.exp, ISSUED_AT + 86_400);
    assert_eq!(issued.claims.iat, ISSUED_AT);

    let claims = service.verify(&issued.token).unwrap();
    assert_eq!(claims.username, "alice");
    assert_eq!(claims.role, Role::Vendor);
    assert_eq!(claims, issued.claims);
}

#[test]
fn test_expiry_boundary() {
    let clock = Arc::new(ManualClock::new(ISSUED_AT));
    let service = service_at(clock.clone());
    let issued = service.issue("alice", Role::Customer).unwrap();

    // 23h59m
    clock.set(ISSUED_AT + 86_340);
    assert!(service.verify(&issued.token).is_ok());

    // exactly 24h
    clock.set(ISSUED_AT + 86_400);
    assert!(service.verify(&issued.token).is_ok());

    // 24h and one second
    clock.set(ISSUED_AT + 86_401);
    assert_eq!(service.verify(&issued.token), Err(TokenError::Expired));
}

#[test]
fn test_lifetime_ignores_environment() {
    std::env::set_var("SESSION_TTL_SECONDS", "60");
    let auth = AuthConfig::from_env();
    let config = TokenServiceConfig::from_jwt_config(&auth.jwt).unwrap();

    let clock = Arc::new(ManualClock::new(ISSUED_AT));
    let service = TokenService::with_clock(config, clock.clone());
    let issued = service.issue("alice", Role::Vendor).unwrap();
    assert_eq!(issued.claims.exp - issued.claims.iat, 86_400);

    clock.set(ISSUED_AT + 86_340);
    assert!(service.verify(&issued.token).is_ok());
    std::env::remove_var("SESSION_TTL_SECONDS");
}

#[test]
fn test_wrong_secret_is_invalid_signature() {
    let clock = Arc::new(ManualClock::new(ISSUED_AT));
    let other = TokenService::with_clock(TokenServiceConfig::new("other-secret"), clock.clone());
    let issued = other.issue("mallory", Role::Vendor).unwrap();

    let service = service_at(clock);
    assert_eq!(
        service.verify(&issued.token),
        Err(TokenError::InvalidSignature)
    );
}

#[test]
fn test_tampered_payload_is_invalid_signature() {
    let clock = Arc::new(ManualClock::new(ISSUED_AT));
    let service = service_at(clock);

    let genuine = service.issue("alice", Role::Customer).unwrap();
    let forged_claims = SessionClaims::new("alice", Role::Vendor, ISSUED_AT);
    let forged = encode(
        &Header::new(Algorithm::HS256),
        &forged_claims,
        &EncodingKey::from_secret(b"guess"),
    )
    .unwrap();

    let genuine_parts: Vec<&str> = genuine.token.split('.').collect();
    let forged_parts: Vec<&str> = forged.split('.').collect();
    let spliced = format!("{}.{}.{}", genuine_parts[0], forged_parts[1], genuine_parts[2]);

    assert_eq!(service.verify(&spliced), Err(TokenError::InvalidSignature));
}

#[test]
fn test_other_hmac_algorithm_is_invalid_signature() {
    let clock = Arc::new(ManualClock::new(ISSUED_AT));
    let service = service_at(clock);

    let claims = SessionClaims::new("alice", Role::Vendor, ISSUED_AT);
    let token = encode(
        &Header::new(Algorithm::HS512),
        &claims,
        &EncodingKey::from_secret(b"test-secret"),
    )
    .unwrap();

    assert_eq!(service.verify(&token), Err(TokenError::InvalidSignature));
}

#[test]
fn test_garbage_is_malformed() {
    let clock = Arc::new(ManualClock::new(ISSUED_AT));
    let service = service_at(clock);

    assert_eq!(service.verify("not-a-jwt"), Err(TokenError::Malformed));
    assert_eq!(service.verify("a.b.c"), Err(TokenError::Malformed));
    assert_eq!(service.verify(""), Err(TokenError::Malformed));
}

#[test]
fn test_expired_check_uses_clock_not_wall_time() {
    // Issued far in the past by wall-clock standards
    let clock = Arc::new(ManualClock::new(1_000));
    let service = service_at(clock);

    let issued = service.issue("alice", Role::Customer).unwrap();
    assert!(service.verify(&issued.token).is_ok());
}
