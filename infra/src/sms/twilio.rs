//! Twilio SMS Service Implementation
//!
//! Sends SMS through the Twilio Messages API with basic authentication.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, info};

use mr_shared::utils::validation::{is_valid_phone_number, mask_phone_number};

use super::sms_service::SmsService;
use crate::InfrastructureError;

/// Twilio SMS service configuration
#[derive(Debug, Clone)]
pub struct TwilioConfig {
    /// Twilio Account SID
    pub account_sid: String,
    /// Twilio Auth Token
    pub auth_token: String,
    /// From phone number (must be a Twilio phone number)
    pub from_number: String,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl TwilioConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let account_sid = std::env::var("TWILIO_ACCOUNT_SID")
            .map_err(|_| InfrastructureError::Config("TWILIO_ACCOUNT_SID not set".to_string()))?;
        let auth_token = std::env::var("TWILIO_AUTH_TOKEN")
            .map_err(|_| InfrastructureError::Config("TWILIO_AUTH_TOKEN not set".to_string()))?;
        let from_number = std::env::var("TWILIO_FROM_NUMBER")
            .map_err(|_| InfrastructureError::Config("TWILIO_FROM_NUMBER not set".to_string()))?;

        if !from_number.starts_with('+') {
            return Err(InfrastructureError::Config(
                "TWILIO_FROM_NUMBER must be in E.164 format (starting with '+')".to_string(),
            ));
        }

        Ok(Self {
            account_sid,
            auth_token,
            from_number,
            request_timeout_secs: std::env::var("TWILIO_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        })
    }
}

/// Twilio SMS service implementation
pub struct TwilioSmsService {
    client: Client,
    config: TwilioConfig,
}

impl TwilioSmsService {
    /// Create a new Twilio SMS service
    pub fn new(config: TwilioConfig) -> Result<Self, InfrastructureError> {
        if config.account_sid.is_empty() || config.auth_token.is_empty() {
            return Err(InfrastructureError::Config(
                "Twilio credentials are not configured".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!(
            from = %mask_phone_number(&config.from_number),
            "Twilio SMS service initialized"
        );

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        Self::new(TwilioConfig::from_env()?)
    }

    fn messages_url(&self) -> String {
        format!(
            "https://api.twilio.com/2010-04-01/Accounts/{}/Messages.json",
            self.config.account_sid
        )
    }

    fn basic_auth_header(&self) -> String {
        let credentials = format!("{}:{}", self.config.account_sid, self.config.auth_token);
        format!("Basic {}", STANDARD.encode(credentials))
    }
}

#[async_trait]
impl SmsService for TwilioSmsService {
    async fn send_sms(
        &self,
        phone_number: &str,
        message: &str,
    ) -> Result<String, InfrastructureError> {
        if !is_valid_phone_number(phone_number) {
            return Err(InfrastructureError::Sms(format!(
                "Invalid phone number format: {}",
                mask_phone_number(phone_number)
            )));
        }

        debug!(
            to = %mask_phone_number(phone_number),
            "Sending SMS via Twilio"
        );

        let params = [
            ("To", phone_number),
            ("From", self.config.from_number.as_str()),
            ("Body", message),
        ];

        let response = self
            .client
            .post(self.messages_url())
            .header("Authorization", self.basic_auth_header())
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            error!(status = %status, "Twilio send failed");
            return Err(InfrastructureError::Sms(format!(
                "Twilio returned {}: {}",
                status, detail
            )));
        }

        let payload: Value = response.json().await?;
        let sid = payload["sid"].as_str().unwrap_or("unknown").to_string();

        info!(
            to = %mask_phone_number(phone_number),
            message_id = %sid,
            "SMS sent via Twilio"
        );

        Ok(sid)
    }

    fn provider_name(&self) -> &str {
        "Twilio"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> TwilioConfig {
        TwilioConfig {
            account_sid: "AC0123456789abcdef".to_string(),
            auth_token: "token".to_string(),
            from_number: "+15550000000".to_string(),
            request_timeout_secs: 30,
        }
    }

    #[test]
    fn test_new_rejects_empty_credentials() {
        let result = TwilioSmsService::new(TwilioConfig {
            account_sid: String::new(),
            auth_token: String::new(),
            ..config()
        });
        assert!(matches!(result, Err(InfrastructureError::Config(_))));
    }

    #[test]
    fn test_messages_url_contains_account_sid() {
        let service = TwilioSmsService::new(config()).unwrap();
        assert!(service.messages_url().contains("AC0123456789abcdef"));
    }

    #[tokio::test]
    async fn test_send_rejects_invalid_phone() {
        let service = TwilioSmsService::new(config()).unwrap();
        let result = service.send_sms("not-a-number", "hello").await;
        assert!(matches!(result, Err(InfrastructureError::Sms(_))));
    }
}
