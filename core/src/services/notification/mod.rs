//! Notification gateway interfaces and message templates.
//!
//! Email and SMS delivery are external collaborators behind narrow traits.
//! Delivery is never transactional with credential issuance: by the time a
//! message is handed to a gateway the token or code is already persisted,
//! and a failed send must not unwind it. The `deliver_*` helpers encode
//! that policy in one place: log the failure, report whether the message
//! went out, never return an error.

pub mod mock;
pub mod templates;

use async_trait::async_trait;
use mr_shared::utils::validation::{mask_email, mask_phone_number};

use crate::errors::DeliveryError;

/// Trait for email delivery
#[async_trait]
pub trait EmailGateway: Send + Sync {
    /// Send an email, returning a provider message id
    async fn send_email(
        &self,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<String, DeliveryError>;
}

/// Trait for SMS delivery
#[async_trait]
pub trait SmsGateway: Send + Sync {
    /// Send a text message, returning a provider message id
    async fn send_sms(&self, to: &str, body: &str) -> Result<String, DeliveryError>;
}

/// Send an email, swallowing delivery failures
///
/// Returns `true` when the gateway accepted the message.
pub async fn deliver_email<E: EmailGateway + ?Sized>(
    gateway: &E,
    to: &str,
    subject: &str,
    body: &str,
) -> bool {
    match gateway.send_email(to, subject, body).await {
        Ok(message_id) => {
            tracing::info!(
                to = %mask_email(to),
                message_id = %message_id,
                event = "email_sent",
                "Email delivered"
            );
            true
        }
        Err(e) => {
            tracing::warn!(
                to = %mask_email(to),
                error = %e,
                event = "email_delivery_failed",
                "Email delivery failed; continuing without rollback"
            );
            false
        }
    }
}

/// Send an SMS, swallowing delivery failures
pub async fn deliver_sms<S: SmsGateway + ?Sized>(gateway: &S, to: &str, body: &str) -> bool {
    match gateway.send_sms(to, body).await {
        Ok(message_id) => {
            tracing::info!(
                to = %mask_phone_number(to),
                message_id = %message_id,
                event = "sms_sent",
                "SMS delivered"
            );
            true
        }
        Err(e) => {
            tracing::warn!(
                to = %mask_phone_number(to),
                error = %e,
                event = "sms_delivery_failed",
                "SMS delivery failed; continuing without rollback"
            );
            false
        }
    }
}
