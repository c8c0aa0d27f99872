//! Account entity representing a registered user of the platform.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account entity holding the core identity record
///
/// Emails are not unique at the storage level; uniqueness of *verified*
/// emails is enforced by the verification flow instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier for the account
    pub id: Uuid,

    /// Unique username, derived from the email local part at signup
    pub username: String,

    /// Email address
    pub email: String,

    /// Bcrypt hash of the password
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Whether this account was linked to a Google login
    pub google_linked: bool,

    /// Whether the account is active (inactive accounts cannot log in)
    pub is_active: bool,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the account was last updated
    pub updated_at: DateTime<Utc>,

    /// Timestamp of the account's last login
    pub last_login_at: Option<DateTime<Utc>>,
}

impl Account {
    /// Creates a new Account instance
    pub fn new(
        username: String,
        email: String,
        password_hash: String,
        first_name: String,
        last_name: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
            first_name,
            last_name,
            google_linked: false,
            is_active: true,
            created_at: now,
            updated_at: now,
            last_login_at: None,
        }
    }

    /// Full display name, falling back to the username
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let trimmed = full.trim();
        if trimmed.is_empty() {
            self.username.clone()
        } else {
            trimmed.to_string()
        }
    }

    /// Replaces the stored password hash
    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }

    /// Changes the email address
    pub fn set_email(&mut self, email: String) {
        self.email = email;
        self.updated_at = Utc::now();
    }

    /// Marks the account as linked to a Google login
    pub fn link_google(&mut self) {
        self.google_linked = true;
        self.updated_at = Utc::now();
    }

    /// Deactivates the account
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }

    /// Updates the last login timestamp
    pub fn update_last_login(&mut self) {
        self.last_login_at = Some(Utc::now());
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> Account {
        Account::new(
            "jane".to_string(),
            "jane@example.com".to_string(),
            "$2b$12$hash".to_string(),
            "Jane".to_string(),
            "Doe".to_string(),
        )
    }

    #[test]
    fn test_new_account() {
        let account = account();
        assert_eq!(account.username, "jane");
        assert_eq!(account.email, "jane@example.com");
        assert!(account.is_active);
        assert!(!account.google_linked);
        assert!(account.last_login_at.is_none());
    }

    #[test]
    fn test_display_name() {
        let mut account = account();
        assert_eq!(account.display_name(), "Jane Doe");

        account.first_name.clear();
        account.last_name.clear();
        assert_eq!(account.display_name(), "jane");
    }

    #[test]
    fn test_update_last_login() {
        let mut account = account();
        assert!(account.last_login_at.is_none());
        account.update_last_login();
        assert!(account.last_login_at.is_some());
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let json = serde_json::to_value(account()).unwrap();
        assert!(json.get("password_hash").is_none());
        assert!(json.get("email").is_some());
    }
}
