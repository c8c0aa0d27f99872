//! Public site configuration: base URL for emailed links, sender identity
//! and the admin bootstrap list.

use serde::{Deserialize, Serialize};

/// Site-level settings shared by email templates and the admin bootstrap
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SiteConfig {
    /// Public base URL used to build verification and reset links
    pub site_url: String,

    /// From address for outgoing mail
    pub from_email: String,

    /// Display name used in outgoing mail
    pub from_name: String,

    /// Emails granted admin capability at startup (seed only; the
    /// admin-grant table is the source of truth afterwards)
    #[serde(default)]
    pub seed_admin_emails: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_url: String::from("http://localhost:8080"),
            from_email: String::from("noreply@mrmotors.example"),
            from_name: String::from("MrMotors"),
            seed_admin_emails: Vec::new(),
        }
    }
}

impl SiteConfig {
    /// Create from environment variables
    ///
    /// `SEED_ADMIN_EMAILS` is a comma-separated list.
    pub fn from_env() -> Self {
        let site_url = std::env::var("SITE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());
        let from_email = std::env::var("FROM_EMAIL")
            .unwrap_or_else(|_| "noreply@mrmotors.example".to_string());
        let from_name = std::env::var("FROM_NAME").unwrap_or_else(|_| "MrMotors".to_string());
        let seed_admin_emails = std::env::var("SEED_ADMIN_EMAILS")
            .map(|raw| {
                raw.split(',')
                    .map(|s| s.trim().to_lowercase())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Self {
            site_url,
            from_email,
            from_name,
            seed_admin_emails,
        }
    }

    /// Build the clickable email-verification link for a token
    pub fn verification_url(&self, token: &str) -> String {
        format!("{}/verify-email/{}/", self.site_url.trim_end_matches('/'), token)
    }

    /// Build the clickable password-reset link for a token
    pub fn password_reset_url(&self, token: &str) -> String {
        format!("{}/password-reset/{}/", self.site_url.trim_end_matches('/'), token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_building_strips_trailing_slash() {
        let config = SiteConfig {
            site_url: String::from("https://mrmotors.example/"),
            ..Default::default()
        };
        assert_eq!(
            config.verification_url("abc123"),
            "https://mrmotors.example/verify-email/abc123/"
        );
        assert_eq!(
            config.password_reset_url("abc123"),
            "https://mrmotors.example/password-reset/abc123/"
        );
    }
}
