//! Traits for SMS delivery integration

use async_trait::async_trait;

/// Trait for SMS service integration
#[async_trait]
pub trait SmsServiceTrait: Send + Sync {
    /// Send `body` to `phone`, returning the provider message id
    async fn send_sms(&self, phone: &str, body: &str) -> Result<String, String>;

    /// Provider name for logs
    fn provider_name(&self) -> &str;
}
