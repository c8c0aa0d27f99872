//! Configuration for the verification service

use mr_shared::config::SiteConfig;

/// Configuration for the verification service
#[derive(Debug, Clone, Default)]
pub struct VerificationServiceConfig {
    /// Site settings used to build links and address outgoing mail
    pub site: SiteConfig,
}

impl VerificationServiceConfig {
    /// Create a configuration around the given site settings
    pub fn new(site: SiteConfig) -> Self {
        Self { site }
    }
}
