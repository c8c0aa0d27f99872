//! Account repository trait defining the interface for identity persistence.
//!
//! Emails are deliberately not unique at this level: several accounts may
//! hold the same address while at most one of them has it verified. The
//! verification service enforces that rule through
//! [`find_all_by_email`](AccountRepository::find_all_by_email).

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::account::Account;
use crate::errors::DomainError;

/// Repository trait for Account persistence operations
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError>;

    /// Find an account by email
    ///
    /// When several accounts share the address, the earliest-created one is
    /// returned. Used for login and password-reset requests.
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError>;

    /// Find every account holding the given email
    async fn find_all_by_email(&self, email: &str) -> Result<Vec<Account>, DomainError>;

    /// Check whether a username is already taken
    async fn username_exists(&self, username: &str) -> Result<bool, DomainError>;

    /// Check whether any *other* account holds the given email
    ///
    /// # Arguments
    /// * `email` - The email to check
    /// * `excluding` - Account id to exclude from the check
    async fn email_taken_by_other(
        &self,
        email: &str,
        excluding: Uuid,
    ) -> Result<bool, DomainError>;

    /// Create a new account
    ///
    /// Fails with a validation error when the username is already taken.
    async fn create(&self, account: Account) -> Result<Account, DomainError>;

    /// Update an existing account
    ///
    /// Fails with `NotFound` when the account does not exist.
    async fn update(&self, account: Account) -> Result<Account, DomainError>;
}
