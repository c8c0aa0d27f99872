//! Adapters implementing the core notification gateway traits over the
//! infrastructure email/SMS services.

use async_trait::async_trait;

use mr_core::errors::DeliveryError;
use mr_core::services::notification::{EmailGateway, SmsGateway};

use crate::email::EmailService;
use crate::sms::SmsService;

/// Adapter exposing any [`EmailService`] as a core [`EmailGateway`]
pub struct EmailGatewayAdapter {
    service: Box<dyn EmailService>,
}

impl EmailGatewayAdapter {
    /// Wrap an email service
    pub fn new(service: Box<dyn EmailService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl EmailGateway for EmailGatewayAdapter {
    async fn send_email(
        &self,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<String, DeliveryError> {
        self.service
            .send_email(to, subject, body)
            .await
            .map_err(|e| DeliveryError::Email(e.to_string()))
    }
}

/// Adapter exposing any [`SmsService`] as a core [`SmsGateway`]
pub struct SmsGatewayAdapter {
    service: Box<dyn SmsService>,
}

impl SmsGatewayAdapter {
    /// Wrap an SMS service
    pub fn new(service: Box<dyn SmsService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl SmsGateway for SmsGatewayAdapter {
    async fn send_sms(&self, to: &str, body: &str) -> Result<String, DeliveryError> {
        self.service
            .send_sms(to, body)
            .await
            .map_err(|e| DeliveryError::Sms(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::email::MockEmailService;
    use crate::sms::MockSmsService;

    #[tokio::test]
    async fn test_email_adapter_maps_errors() {
        let adapter = EmailGatewayAdapter::new(Box::new(MockEmailService::failing()));
        let result = adapter.send_email("user@example.com", "s", "b").await;
        assert!(matches!(result, Err(DeliveryError::Email(_))));
    }

    #[tokio::test]
    async fn test_sms_adapter_passes_through() {
        let adapter = SmsGatewayAdapter::new(Box::new(MockSmsService::new()));
        let result = adapter.send_sms("+1234567890", "hello").await;
        assert!(result.unwrap().starts_with("mock_"));
    }
}
