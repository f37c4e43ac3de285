//! SMS Service Trait Adapter
//!
//! Implements the core `SmsServiceTrait` for any infrastructure SMS provider
//! and bounds every send by a deadline.

use std::time::Duration;

use async_trait::async_trait;
use cv_core::services::otp::SmsServiceTrait;

use crate::sms::sms_service::{mask_phone_number, SmsService};

/// Adapter that exposes an infrastructure SMS provider to the core OTP service
pub struct SmsServiceAdapter {
    inner: Box<dyn SmsService>,
    timeout: Duration,
}

impl SmsServiceAdapter {
    /// Wrap a provider, failing sends that take longer than `timeout`
    pub fn new(inner: Box<dyn SmsService>, timeout: Duration) -> Self {
        Self { inner, timeout }
    }
}

#[async_trait]
impl SmsServiceTrait for SmsServiceAdapter {
    async fn send_sms(&self, phone: &str, body: &str) -> Result<String, String> {
        match tokio::time::timeout(self.timeout, self.inner.send_sms(phone, body)).await {
            Ok(Ok(message_id)) => Ok(message_id),
            Ok(Err(e)) => Err(e.to_string()),
            Err(_) => {
                tracing::error!(
                    provider = self.inner.provider_name(),
                    phone = %mask_phone_number(phone),
                    timeout_ms = self.timeout.as_millis() as u64,
                    event = "sms_send_timeout",
                    "SMS send exceeded deadline"
                );
                Err(format!(
                    "SMS send timed out after {} ms",
                    self.timeout.as_millis()
                ))
            }
        }
    }

    fn provider_name(&self) -> &str {
        self.inner.provider_name()
    }
}
