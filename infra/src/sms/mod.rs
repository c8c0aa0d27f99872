//! SMS Service Module
//!
//! Implementations of outbound SMS delivery:
//!
//! - **SmsService trait**: common interface for all providers
//! - **Mock implementation**: logs messages for development and tests
//! - **Twilio**: production delivery via the Twilio Messages API
//!
//! With no provider configured, the mock is used: verification codes are
//! written to the log and the send reports success, so phone verification
//! keeps working in development.

pub mod mock_sms;
pub mod sms_service;
pub mod twilio;

pub use mock_sms::MockSmsService;
pub use sms_service::SmsService;
pub use twilio::{TwilioConfig, TwilioSmsService};

use mr_shared::config::SmsProviderConfig;

/// Create an SMS service based on configuration
pub fn create_sms_service(config: &SmsProviderConfig) -> Box<dyn SmsService> {
    match config.provider.as_str() {
        "twilio" => {
            let twilio_config = TwilioConfig {
                account_sid: config.account_id.clone(),
                auth_token: config.auth_token.clone(),
                from_number: config.from_number.clone(),
                request_timeout_secs: 30,
            };

            match TwilioSmsService::new(twilio_config) {
                Ok(service) => Box::new(service),
                Err(e) => {
                    tracing::error!("Failed to initialize Twilio SMS service: {}", e);
                    tracing::warn!("Falling back to mock SMS service");
                    Box::new(MockSmsService::new())
                }
            }
        }
        "mock" => Box::new(MockSmsService::new()),
        other => {
            tracing::warn!("Unknown SMS provider '{}', using mock implementation", other);
            Box::new(MockSmsService::new())
        }
    }
}
