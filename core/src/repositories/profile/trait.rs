//! Profile repository trait: persistence for verification and reset state.
//!
//! Consumption of single-use credentials goes through the `consume_*`
//! methods, which are conditional updates keyed by the expected token
//! value. Two requests racing to consume the same token both read it as
//! valid, but only one conditional update takes effect; the loser sees
//! `false` and reports the token as unknown.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::profile::Profile;
use crate::errors::DomainError;

/// Repository trait for Profile persistence operations
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find the profile owned by an account
    async fn find_by_account_id(&self, account_id: Uuid) -> Result<Option<Profile>, DomainError>;

    /// Find the profile holding the given email-verification token
    async fn find_by_verification_token(
        &self,
        token: &str,
    ) -> Result<Option<Profile>, DomainError>;

    /// Find the profile holding the given password-reset token
    async fn find_by_reset_token(&self, token: &str) -> Result<Option<Profile>, DomainError>;

    /// Create a new profile
    async fn create(&self, profile: Profile) -> Result<Profile, DomainError>;

    /// Update an existing profile (last write wins)
    async fn update(&self, profile: Profile) -> Result<Profile, DomainError>;

    /// Atomically consume an email-verification token
    ///
    /// Marks the email verified and clears both email credentials, but only
    /// if the profile still holds `token`.
    ///
    /// # Returns
    /// * `Ok(true)` - The token was consumed by this call
    /// * `Ok(false)` - The profile no longer holds this token
    async fn consume_verification_token(
        &self,
        profile_id: Uuid,
        token: &str,
    ) -> Result<bool, DomainError>;

    /// Atomically consume a password-reset token
    ///
    /// Clears the reset slot, but only if the profile still holds `token`.
    ///
    /// # Returns
    /// * `Ok(true)` - The token was consumed by this call
    /// * `Ok(false)` - The profile no longer holds this token
    async fn consume_reset_token(
        &self,
        profile_id: Uuid,
        token: &str,
    ) -> Result<bool, DomainError>;
}
