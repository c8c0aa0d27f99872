//! Recording mock gateways for development and tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::errors::DeliveryError;

use super::{EmailGateway, SmsGateway};

/// A recorded outgoing email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Mock email gateway recording every message
#[derive(Default)]
pub struct MockEmailGateway {
    sent: Arc<Mutex<Vec<SentEmail>>>,
    should_fail: bool,
}

impl MockEmailGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// A gateway that fails every send, for delivery-failure tests
    pub fn failing() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            should_fail: true,
        }
    }

    /// Messages sent so far
    pub fn sent(&self) -> Vec<SentEmail> {
        self.sent.lock().unwrap().clone()
    }

    /// The most recent message sent to an address
    pub fn last_to(&self, to: &str) -> Option<SentEmail> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|m| m.to == to)
            .cloned()
    }
}

#[async_trait]
impl EmailGateway for MockEmailGateway {
    async fn send_email(
        &self,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<String, DeliveryError> {
        if self.should_fail {
            return Err(DeliveryError::Email("simulated failure".to_string()));
        }

        let mut sent = self.sent.lock().unwrap();
        sent.push(SentEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(format!("mock-email-{}", sent.len()))
    }
}

/// A recorded outgoing SMS
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentSms {
    pub to: String,
    pub body: String,
}

/// Mock SMS gateway recording every message
#[derive(Default)]
pub struct MockSmsGateway {
    sent: Arc<Mutex<Vec<SentSms>>>,
    should_fail: bool,
}

impl MockSmsGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// A gateway that fails every send
    pub fn failing() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            should_fail: true,
        }
    }

    /// Messages sent so far
    pub fn sent(&self) -> Vec<SentSms> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl SmsGateway for MockSmsGateway {
    async fn send_sms(&self, to: &str, body: &str) -> Result<String, DeliveryError> {
        if self.should_fail {
            return Err(DeliveryError::Sms("simulated failure".to_string()));
        }

        let mut sent = self.sent.lock().unwrap();
        sent.push(SentSms {
            to: to.to_string(),
            body: body.to_string(),
        });
        Ok(format!("mock-sms-{}", sent.len()))
    }
}
