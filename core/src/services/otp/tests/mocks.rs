//! Mock implementations for testing the OTP service

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::services::otp::SmsServiceTrait;

// Mock SMS service recording every message it is asked to send
pub struct MockSmsService {
    pub sent_messages: Arc<Mutex<Vec<(String, String)>>>,
    pub should_fail: bool,
}

impl MockSmsService {
    pub fn new(should_fail: bool) -> Self {
        Self {
            sent_messages: Arc::new(Mutex::new(Vec::new())),
            should_fail,
        }
    }

    pub fn last_body_for(&self, phone: &str) -> Option<String> {
        self.sent_messages
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(to, _)| to == phone)
            .map(|(_, body)| body.clone())
    }

    pub fn sent_count(&self) -> usize {
        self.sent_messages.lock().unwrap().len()
    }
}

#[async_trait]
impl SmsServiceTrait for MockSmsService {
    async fn send_sms(&self, phone: &str, body: &str) -> Result<String, String> {
        if self.should_fail {
            return Err("SMS service error".to_string());
        }
        self.sent_messages
            .lock()
            .unwrap()
            .push((phone.to_string(), body.to_string()));
        Ok(format!("mock-msg-{}", uuid::Uuid::new_v4()))
    }

    fn provider_name(&self) -> &str {
        "mock"
    }
}
