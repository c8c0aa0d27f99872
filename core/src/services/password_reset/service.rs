//! Password reset service implementation

use std::sync::Arc;

use mr_shared::config::SiteConfig;
use mr_shared::utils::validation::mask_email;

use crate::domain::entities::profile::Profile;
use crate::errors::{DomainError, DomainResult, ResetError};
use crate::repositories::{AccountRepository, ProfileRepository};
use crate::services::account::password::{hash_password, validate_password};
use crate::services::notification::{deliver_email, templates, EmailGateway};

/// Configuration for the password reset service
#[derive(Debug, Clone, Default)]
pub struct PasswordResetServiceConfig {
    /// Site settings used to build reset links
    pub site: SiteConfig,
}

/// Password reset service
///
/// Reset tokens expire 24 hours after issuance. Expiry is lazy: an expired
/// token stays on the profile until the next issuance overwrites it or a
/// consumption attempt runs into it; the validity check itself never
/// mutates anything.
pub struct PasswordResetService<A, P, E>
where
    A: AccountRepository,
    P: ProfileRepository,
    E: EmailGateway,
{
    /// Account repository for identity lookups and password updates
    account_repository: Arc<A>,
    /// Profile repository holding reset-token state
    profile_repository: Arc<P>,
    /// Email gateway
    email_gateway: Arc<E>,
    /// Service configuration
    config: PasswordResetServiceConfig,
}

impl<A, P, E> PasswordResetService<A, P, E>
where
    A: AccountRepository,
    P: ProfileRepository,
    E: EmailGateway,
{
    /// Create a new password reset service
    pub fn new(
        account_repository: Arc<A>,
        profile_repository: Arc<P>,
        email_gateway: Arc<E>,
        config: PasswordResetServiceConfig,
    ) -> Self {
        Self {
            account_repository,
            profile_repository,
            email_gateway,
            config,
        }
    }

    /// Issue a reset token for the account holding `email` and mail the link
    ///
    /// Whether the email exists must not be observable by callers of the
    /// HTTP API; `ResetError::AccountNotFound` exists so the handler can
    /// respond identically in both cases while the outcome stays testable.
    pub async fn request_reset(&self, email: &str) -> DomainResult<String> {
        let account = self
            .account_repository
            .find_by_email(email)
            .await?
            .ok_or(ResetError::AccountNotFound)?;

        let mut profile = self
            .profile_repository
            .find_by_account_id(account.id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "Profile".to_string(),
            })?;

        let token = profile.issue_reset_token();
        self.profile_repository.update(profile).await?;

        tracing::info!(
            account_id = %account.id,
            email = %mask_email(email),
            event = "reset_token_issued",
            "Issued password reset token"
        );

        let message = templates::password_reset_email(
            &account.first_name,
            &self.config.site.password_reset_url(&token),
        );
        deliver_email(&*self.email_gateway, &account.email, &message.subject, &message.body)
            .await;

        Ok(token)
    }

    /// Check whether a profile's reset token is still valid
    pub fn is_reset_token_valid(&self, profile: &Profile) -> bool {
        profile.is_reset_token_valid()
    }

    /// Consume a reset token and set the new password
    ///
    /// # Errors
    /// * `ResetError::TokenNotFound` - no profile holds the token, or it
    ///   was consumed concurrently
    /// * `ResetError::TokenExpired` - the token is older than 24 hours; the
    ///   stored token is left untouched
    pub async fn consume_reset_token(
        &self,
        token: &str,
        new_password: &str,
    ) -> DomainResult<()> {
        let profile = self
            .profile_repository
            .find_by_reset_token(token)
            .await?
            .ok_or(ResetError::TokenNotFound)?;

        if !profile.is_reset_token_valid() {
            tracing::warn!(
                account_id = %profile.account_id,
                event = "reset_token_expired",
                "Rejected expired password reset token"
            );
            return Err(ResetError::TokenExpired.into());
        }

        validate_password(new_password)?;

        let consumed = self
            .profile_repository
            .consume_reset_token(profile.id, token)
            .await?;
        if !consumed {
            return Err(ResetError::TokenNotFound.into());
        }

        let mut account = self
            .account_repository
            .find_by_id(profile.account_id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "Account".to_string(),
            })?;

        account.set_password_hash(hash_password(new_password)?);
        self.account_repository.update(account).await?;

        tracing::info!(
            account_id = %profile.account_id,
            event = "password_reset",
            "Password reset completed"
        );

        Ok(())
    }
}
