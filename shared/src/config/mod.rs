//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `notification` - Email/SMS provider selection and credentials
//! - `server` - HTTP server and CORS configuration
//! - `site` - Public site URL, sender identity and admin bootstrap

pub mod database;
pub mod environment;
pub mod notification;
pub mod server;
pub mod site;

use serde::{Deserialize, Serialize};

pub use database::DatabaseConfig;
pub use environment::{Environment, LoggingConfig};
pub use notification::{EmailProviderConfig, NotificationConfig, SmsProviderConfig};
pub use server::{CorsConfig, ServerConfig};
pub use site::SiteConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Notification gateway configuration
    pub notification: NotificationConfig,

    /// Public site configuration
    pub site: SiteConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            notification: NotificationConfig::default(),
            site: SiteConfig::default(),
            cors: CorsConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let env = Environment::from_env();
        Self {
            environment: env,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            notification: NotificationConfig::from_env(),
            site: SiteConfig::from_env(),
            cors: CorsConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}
