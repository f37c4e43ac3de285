//! Shared fixtures for API integration tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use cv_api::AppState;
use cv_core::services::{ManualClock, PasswordHasher};
use cv_infra::{create_sms_service, Repositories};
use cv_shared::{AppConfig, JwtConfig, SmsConfig};

pub const TEST_SECRET: &str = "integration-test-secret";
pub const START: i64 = 1_700_000_000;

pub struct TestContext {
    pub state: web::Data<AppState>,
    pub clock: Arc<ManualClock>,
}

impl TestContext {
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.auth.jwt = JwtConfig::new(TEST_SECRET);

        let clock = Arc::new(ManualClock::new(START));
        let sms = create_sms_service(&SmsConfig::default()).unwrap();
        let state = AppState::with_clock(config, Repositories::in_memory(), sms, clock.clone())
            .unwrap()
            .with_password_hasher(PasswordHasher::new(4));

        Self {
            state: web::Data::new(state),
            clock,
        }
    }

    /// Signed session token for `username` with `role`, issued at the current test time
    pub fn token_for(&self, username: &str, role: cv_core::domain::entities::Role) -> String {
        self.state.token_service.issue(username, role).unwrap().token
    }
}
