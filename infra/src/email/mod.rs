//! Email Service Module
//!
//! Implementations of outbound email delivery:
//!
//! - **EmailService trait**: common interface for all providers
//! - **Mock implementation**: logs messages for development and tests
//! - **Mailjet**: production delivery via the Mailjet Send API
//!
//! Unconfigured credentials fall back to the mock implementation so that
//! signup and reset flows keep working in development.

pub mod email_service;
pub mod mailjet;
pub mod mock_email;

pub use email_service::EmailService;
pub use mailjet::{MailjetConfig, MailjetEmailService};
pub use mock_email::MockEmailService;

use mr_shared::config::EmailProviderConfig;

/// Create an email service based on configuration
pub fn create_email_service(config: &EmailProviderConfig) -> Box<dyn EmailService> {
    match config.provider.as_str() {
        "mailjet" => {
            let mailjet_config = MailjetConfig {
                api_key: config.api_key.clone(),
                api_secret: config.api_secret.clone(),
                request_timeout_secs: 30,
            };

            match MailjetEmailService::new(mailjet_config) {
                Ok(service) => Box::new(service),
                Err(e) => {
                    tracing::error!("Failed to initialize Mailjet email service: {}", e);
                    tracing::warn!("Falling back to mock email service");
                    Box::new(MockEmailService::new())
                }
            }
        }
        "mock" => Box::new(MockEmailService::new()),
        other => {
            tracing::warn!("Unknown email provider '{}', using mock implementation", other);
            Box::new(MockEmailService::new())
        }
    }
}
