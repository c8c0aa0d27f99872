//! Mailjet Email Service Implementation
//!
//! Sends email through the Mailjet Send API (v3.1) with key/secret basic
//! authentication.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, info};

use mr_shared::utils::validation::mask_email;

use super::email_service::EmailService;
use crate::InfrastructureError;

/// Mailjet API endpoint for sending emails
const MAILJET_API_URL: &str = "https://api.mailjet.com/v3.1/send";

/// Mailjet service configuration
#[derive(Debug, Clone)]
pub struct MailjetConfig {
    /// Mailjet API key (public)
    pub api_key: String,
    /// Mailjet API secret (private)
    pub api_secret: String,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl MailjetConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let api_key = std::env::var("MAILJET_API_KEY")
            .map_err(|_| InfrastructureError::Config("MAILJET_API_KEY not set".to_string()))?;
        let api_secret = std::env::var("MAILJET_API_SECRET")
            .map_err(|_| InfrastructureError::Config("MAILJET_API_SECRET not set".to_string()))?;

        Ok(Self {
            api_key,
            api_secret,
            request_timeout_secs: std::env::var("MAILJET_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        })
    }
}

// Mailjet Send API v3.1 request structures
#[derive(Serialize)]
struct SendRequest<'a> {
    #[serde(rename = "Messages")]
    messages: [Message<'a>; 1],
}

#[derive(Serialize)]
struct Message<'a> {
    #[serde(rename = "From")]
    from: EmailAddress<'a>,
    #[serde(rename = "To")]
    to: [EmailAddress<'a>; 1],
    #[serde(rename = "Subject")]
    subject: &'a str,
    #[serde(rename = "TextPart")]
    text_part: &'a str,
}

#[derive(Serialize)]
struct EmailAddress<'a> {
    #[serde(rename = "Email")]
    email: &'a str,
    #[serde(rename = "Name")]
    name: &'a str,
}

/// Mailjet email service implementation
pub struct MailjetEmailService {
    client: Client,
    config: MailjetConfig,
    from_email: String,
    from_name: String,
}

impl MailjetEmailService {
    /// Create a new Mailjet email service
    pub fn new(config: MailjetConfig) -> Result<Self, InfrastructureError> {
        if config.api_key.is_empty() || config.api_secret.is_empty() {
            return Err(InfrastructureError::Config(
                "Mailjet credentials are not configured".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        let from_email = std::env::var("FROM_EMAIL")
            .unwrap_or_else(|_| "noreply@mrmotors.example".to_string());
        let from_name = std::env::var("FROM_NAME").unwrap_or_else(|_| "MrMotors".to_string());

        info!(from = %mask_email(&from_email), "Mailjet email service initialized");

        Ok(Self {
            client,
            config,
            from_email,
            from_name,
        })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        Self::new(MailjetConfig::from_env()?)
    }
}

#[async_trait]
impl EmailService for MailjetEmailService {
    async fn send_email(
        &self,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<String, InfrastructureError> {
        let request = SendRequest {
            messages: [Message {
                from: EmailAddress {
                    email: &self.from_email,
                    name: &self.from_name,
                },
                to: [EmailAddress { email: to, name: "" }],
                subject,
                text_part: body,
            }],
        };

        debug!(to = %mask_email(to), "Sending email via Mailjet");

        let response = self
            .client
            .post(MAILJET_API_URL)
            .basic_auth(&self.config.api_key, Some(&self.config.api_secret))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            error!(status = %status, "Mailjet send failed");
            return Err(InfrastructureError::Email(format!(
                "Mailjet returned {}: {}",
                status, detail
            )));
        }

        let payload: Value = response.json().await?;
        let message_id = payload["Messages"][0]["To"][0]["MessageID"]
            .as_u64()
            .map(|id| id.to_string())
            .unwrap_or_else(|| "unknown".to_string());

        info!(
            to = %mask_email(to),
            message_id = %message_id,
            "Email sent via Mailjet"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Mailjet"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_credentials() {
        let result = MailjetEmailService::new(MailjetConfig {
            api_key: String::new(),
            api_secret: String::new(),
            request_timeout_secs: 30,
        });
        assert!(matches!(result, Err(InfrastructureError::Config(_))));
    }

    #[test]
    fn test_send_request_serialization() {
        let request = SendRequest {
            messages: [Message {
                from: EmailAddress {
                    email: "noreply@mrmotors.example",
                    name: "MrMotors",
                },
                to: [EmailAddress {
                    email: "user@example.com",
                    name: "",
                }],
                subject: "Hello",
                text_part: "Body",
            }],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["Messages"][0]["To"][0]["Email"], "user@example.com");
        assert_eq!(json["Messages"][0]["Subject"], "Hello");
    }
}
