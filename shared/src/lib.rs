//! Shared utilities and common types for the MrMotors server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Response structures
//! - Utility functions (email/phone validation, masking)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, DatabaseConfig, Environment, LoggingConfig, NotificationConfig, ServerConfig,
    SiteConfig,
};
pub use types::ApiResponse;
pub use utils::validation;
