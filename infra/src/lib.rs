//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the MrMotors
//! application. It provides concrete implementations for persistence and
//! external notification services behind the interfaces defined in
//! `mr_core`:
//!
//! - **Database**: MySQL repositories using SQLx
//! - **Email**: mock (logging) and Mailjet HTTP implementations
//! - **SMS**: mock (logging) and Twilio HTTP implementations

pub mod database;
pub mod email;
pub mod gateway;
pub mod sms;

pub use gateway::{EmailGatewayAdapter, SmsGatewayAdapter};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Email service error
    #[error("Email service error: {0}")]
    Email(String),

    /// SMS service error
    #[error("SMS service error: {0}")]
    Sms(String),
}
