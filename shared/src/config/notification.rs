//! Notification gateway configuration: which email/SMS provider to use and
//! its credentials. Providers fall back to the logging mock when left
//! unconfigured so development and test runs never require real credentials.

use serde::{Deserialize, Serialize};

/// Email provider configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailProviderConfig {
    /// Email provider ("mailjet", "mock")
    pub provider: String,
    /// API key (public part for key/secret providers)
    pub api_key: String,
    /// API secret
    pub api_secret: String,
}

impl Default for EmailProviderConfig {
    fn default() -> Self {
        Self {
            provider: String::from("mock"),
            api_key: String::new(),
            api_secret: String::new(),
        }
    }
}

/// SMS provider configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmsProviderConfig {
    /// SMS provider ("twilio", "mock")
    pub provider: String,
    /// Account identifier (Twilio account SID)
    pub account_id: String,
    /// API token/secret
    pub auth_token: String,
    /// From phone number (E.164)
    pub from_number: String,
}

impl Default for SmsProviderConfig {
    fn default() -> Self {
        Self {
            provider: String::from("mock"),
            account_id: String::new(),
            auth_token: String::new(),
            from_number: String::from("+15550000000"),
        }
    }
}

/// Combined notification configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct NotificationConfig {
    pub email: EmailProviderConfig,
    pub sms: SmsProviderConfig,
}

impl NotificationConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            email: EmailProviderConfig {
                provider: std::env::var("EMAIL_PROVIDER").unwrap_or_else(|_| "mock".to_string()),
                api_key: std::env::var("EMAIL_API_KEY").unwrap_or_default(),
                api_secret: std::env::var("EMAIL_API_SECRET").unwrap_or_default(),
            },
            sms: SmsProviderConfig {
                provider: std::env::var("SMS_PROVIDER").unwrap_or_else(|_| "mock".to_string()),
                account_id: std::env::var("SMS_ACCOUNT_ID").unwrap_or_default(),
                auth_token: std::env::var("SMS_AUTH_TOKEN").unwrap_or_default(),
                from_number: std::env::var("SMS_FROM_NUMBER")
                    .unwrap_or_else(|_| "+15550000000".to_string()),
            },
        }
    }
}
