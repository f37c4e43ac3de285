//! Unit tests for the core trait adapter

use std::time::Duration;

use async_trait::async_trait;
use cv_core::services::otp::SmsServiceTrait;

use crate::sms::{MockSmsService, SmsService, SmsServiceAdapter};
use crate::InfrastructureError;

struct SlowSmsService;

#[async_trait]
impl SmsService for SlowSmsService {
    async fn send_sms(&self, _phone_number: &str, _message: &str) -> Result<String, InfrastructureError> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok("late".to_string())
    }

    fn provider_name(&self) -> &str {
        "Slow"
    }
}

#[tokio::test]
async fn test_adapter_forwards_message_id() {
    let adapter = SmsServiceAdapter::new(
        Box::new(MockSmsService::with_options(false, false)),
        Duration::from_secs(5),
    );

    let message_id = adapter.send_sms("+15550001111", "Your OTP is: 000000").await.unwrap();
    assert!(message_id.starts_with("mock_"));
    assert_eq!(adapter.provider_name(), "Mock");
}

#[tokio::test]
async fn test_adapter_maps_provider_error_to_string() {
    let adapter = SmsServiceAdapter::new(
        Box::new(MockSmsService::with_options(false, true)),
        Duration::from_secs(5),
    );

    let error = adapter.send_sms("+15550001111", "body").await.unwrap_err();
    assert!(error.contains("Simulated SMS sending failure"));
}

#[tokio::test(start_paused = true)]
async fn test_adapter_enforces_deadline() {
    let adapter = SmsServiceAdapter::new(Box::new(SlowSmsService), Duration::from_secs(5));

    let error = adapter.send_sms("+15550001111", "body").await.unwrap_err();
    assert!(error.contains("timed out"));
}
