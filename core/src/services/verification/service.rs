//! Main verification service implementation

use constant_time_eq::constant_time_eq;
use std::sync::Arc;
use uuid::Uuid;

use mr_shared::utils::validation::mask_email;

use crate::domain::entities::account::Account;
use crate::domain::entities::profile::{Profile, CODE_LENGTH};
use crate::errors::{DomainError, DomainResult, VerificationError};
use crate::repositories::{AccountRepository, ProfileRepository};
use crate::services::notification::{
    deliver_email, deliver_sms, templates, EmailGateway, SmsGateway,
};

use super::config::VerificationServiceConfig;
use super::types::IssuedCredential;

/// Verification service for email tokens/codes and phone codes
///
/// Two issuance mechanisms exist side by side: the link token for clickable
/// emails and the short numeric code for manual entry. Callers pick either;
/// a profile holds at most one outstanding email credential at a time.
pub struct VerificationService<A, P, E, S>
where
    A: AccountRepository,
    P: ProfileRepository,
    E: EmailGateway,
    S: SmsGateway,
{
    /// Account repository for identity lookups
    account_repository: Arc<A>,
    /// Profile repository holding credential state
    profile_repository: Arc<P>,
    /// Email gateway
    email_gateway: Arc<E>,
    /// SMS gateway
    sms_gateway: Arc<S>,
    /// Service configuration
    config: VerificationServiceConfig,
}

impl<A, P, E, S> VerificationService<A, P, E, S>
where
    A: AccountRepository,
    P: ProfileRepository,
    E: EmailGateway,
    S: SmsGateway,
{
    /// Create a new verification service
    pub fn new(
        account_repository: Arc<A>,
        profile_repository: Arc<P>,
        email_gateway: Arc<E>,
        sms_gateway: Arc<S>,
        config: VerificationServiceConfig,
    ) -> Self {
        Self {
            account_repository,
            profile_repository,
            email_gateway,
            sms_gateway,
            config,
        }
    }

    /// Issue a new email-verification link token for an account
    ///
    /// Overwrites any prior token, persists, then emails the link. Delivery
    /// failure is logged and swallowed; the token stands regardless.
    pub async fn issue_email_token(&self, account_id: Uuid) -> DomainResult<IssuedCredential> {
        let account = self.load_account(account_id).await?;
        let mut profile = self.load_profile(account_id).await?;

        // A verified email never carries an outstanding credential
        if profile.email_verified {
            return Err(VerificationError::AlreadyVerified.into());
        }

        let token = profile.issue_verification_token();
        self.profile_repository.update(profile).await?;

        tracing::info!(
            account_id = %account_id,
            event = "verification_token_issued",
            "Issued email verification token"
        );

        let message = templates::verification_link_email(
            &account.first_name,
            &self.config.site.verification_url(&token),
        );
        let delivered =
            deliver_email(&*self.email_gateway, &account.email, &message.subject, &message.body)
                .await;

        Ok(IssuedCredential { value: token, delivered })
    }

    /// Issue a new 6-digit email-verification code for an account
    pub async fn issue_email_code(&self, account_id: Uuid) -> DomainResult<IssuedCredential> {
        let account = self.load_account(account_id).await?;
        let mut profile = self.load_profile(account_id).await?;

        if profile.email_verified {
            return Err(VerificationError::AlreadyVerified.into());
        }

        let code = profile.issue_verification_code();
        self.profile_repository.update(profile).await?;

        tracing::info!(
            account_id = %account_id,
            event = "verification_code_issued",
            "Issued email verification code"
        );

        let message = templates::verification_code_email(&account.first_name, &code);
        let delivered =
            deliver_email(&*self.email_gateway, &account.email, &message.subject, &message.body)
                .await;

        Ok(IssuedCredential { value: code, delivered })
    }

    /// Verify an email by its link token
    ///
    /// Consumption is a conditional update keyed by the token value, so of
    /// two racing requests only one succeeds; the other sees the token as
    /// unknown.
    ///
    /// # Errors
    /// * `VerificationError::TokenNotFound` - unknown or already-consumed
    ///   token
    /// * `VerificationError::EmailAlreadyInUse` - the email is verified
    ///   under a different account
    pub async fn verify_by_token(&self, token: &str) -> DomainResult<Profile> {
        let mut profile = self
            .profile_repository
            .find_by_verification_token(token)
            .await?
            .ok_or(VerificationError::TokenNotFound)?;

        let account = self.load_account(profile.account_id).await?;
        self.ensure_email_unclaimed(&account).await?;

        let consumed = self
            .profile_repository
            .consume_verification_token(profile.id, token)
            .await?;
        if !consumed {
            return Err(VerificationError::TokenNotFound.into());
        }

        profile.mark_email_verified();

        tracing::info!(
            account_id = %account.id,
            email = %mask_email(&account.email),
            event = "email_verified",
            "Email verified via link token"
        );

        Ok(profile)
    }

    /// Verify an email by its 6-digit code
    ///
    /// Returns `Ok(true)` on an exact match inside the validity window and
    /// `Ok(false)` on a mismatch (or when no code is outstanding).
    ///
    /// # Errors
    /// * `VerificationError::CodeExpired` - a code exists but is older than
    ///   the validity window
    /// * `VerificationError::EmailAlreadyInUse` - as for `verify_by_token`
    pub async fn verify_by_code(&self, account_id: Uuid, code: &str) -> DomainResult<bool> {
        if !code_format_valid(code) {
            return Ok(false);
        }

        let account = self.load_account(account_id).await?;
        let mut profile = self.load_profile(account_id).await?;

        let stored = match profile.verification_code.clone() {
            Some(stored) => stored,
            None => return Ok(false),
        };

        if !profile.is_verification_code_current() {
            tracing::warn!(
                account_id = %account_id,
                event = "verification_code_expired",
                "Rejected expired email verification code"
            );
            return Err(VerificationError::CodeExpired.into());
        }

        if !codes_match(&stored, code) {
            tracing::warn!(
                account_id = %account_id,
                event = "verification_code_mismatch",
                "Rejected non-matching email verification code"
            );
            return Ok(false);
        }

        self.ensure_email_unclaimed(&account).await?;

        profile.mark_email_verified();
        self.profile_repository.update(profile).await?;

        tracing::info!(
            account_id = %account_id,
            email = %mask_email(&account.email),
            event = "email_verified",
            "Email verified via code"
        );

        Ok(true)
    }

    /// Issue a phone-verification code and send it by SMS
    ///
    /// # Errors
    /// * `VerificationError::MissingPhoneNumber` - the profile has no phone
    ///   number on file
    pub async fn issue_phone_code(&self, account_id: Uuid) -> DomainResult<IssuedCredential> {
        let mut profile = self.load_profile(account_id).await?;

        let phone = profile
            .phone_number
            .clone()
            .ok_or(VerificationError::MissingPhoneNumber)?;

        let code = profile.issue_phone_verification_code();
        self.profile_repository.update(profile).await?;

        tracing::info!(
            account_id = %account_id,
            event = "phone_code_issued",
            "Issued phone verification code"
        );

        let delivered =
            deliver_sms(&*self.sms_gateway, &phone, &templates::phone_verification_sms(&code))
                .await;

        Ok(IssuedCredential { value: code, delivered })
    }

    /// Verify the phone number by its 6-digit code
    ///
    /// Same match and expiry rules as [`verify_by_code`](Self::verify_by_code),
    /// targeting the phone slot.
    pub async fn verify_phone_code(&self, account_id: Uuid, code: &str) -> DomainResult<bool> {
        if !code_format_valid(code) {
            return Ok(false);
        }

        let mut profile = self.load_profile(account_id).await?;

        let stored = match profile.phone_verification_code.clone() {
            Some(stored) => stored,
            None => return Ok(false),
        };

        if !profile.is_phone_verification_code_current() {
            tracing::warn!(
                account_id = %account_id,
                event = "phone_code_expired",
                "Rejected expired phone verification code"
            );
            return Err(VerificationError::CodeExpired.into());
        }

        if !codes_match(&stored, code) {
            return Ok(false);
        }

        profile.mark_phone_verified();
        self.profile_repository.update(profile).await?;

        tracing::info!(
            account_id = %account_id,
            event = "phone_verified",
            "Phone number verified"
        );

        Ok(true)
    }

    /// Mark an email verified on the word of an external identity provider
    ///
    /// Used for Google-linked accounts, where the provider already proved
    /// control of the address. The cross-account collision rule still
    /// applies.
    pub async fn mark_verified_via_provider(&self, account_id: Uuid) -> DomainResult<Profile> {
        let account = self.load_account(account_id).await?;
        let mut profile = self.load_profile(account_id).await?;

        self.ensure_email_unclaimed(&account).await?;

        profile.mark_email_verified();
        let profile = self.profile_repository.update(profile).await?;

        tracing::info!(
            account_id = %account_id,
            email = %mask_email(&account.email),
            event = "email_verified",
            "Email verified via identity provider"
        );

        Ok(profile)
    }

    /// Fail when the account's email is already verified under another
    /// account, so a duplicate address can never reach the verified state
    /// twice.
    async fn ensure_email_unclaimed(&self, account: &Account) -> DomainResult<()> {
        let holders = self.account_repository.find_all_by_email(&account.email).await?;

        for other in holders.into_iter().filter(|a| a.id != account.id) {
            if let Some(profile) =
                self.profile_repository.find_by_account_id(other.id).await?
            {
                if profile.email_verified {
                    tracing::warn!(
                        account_id = %account.id,
                        email = %mask_email(&account.email),
                        event = "email_collision",
                        "Email already verified under another account"
                    );
                    return Err(VerificationError::EmailAlreadyInUse.into());
                }
            }
        }

        Ok(())
    }

    async fn load_account(&self, account_id: Uuid) -> DomainResult<Account> {
        self.account_repository
            .find_by_id(account_id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "Account".to_string(),
            })
    }

    async fn load_profile(&self, account_id: Uuid) -> DomainResult<Profile> {
        self.profile_repository
            .find_by_account_id(account_id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "Profile".to_string(),
            })
    }
}

/// Basic shape check before touching stored state
fn code_format_valid(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.chars().all(|c| c.is_ascii_digit())
}

/// Constant-time comparison of two codes
fn codes_match(stored: &str, provided: &str) -> bool {
    stored.len() == provided.len() && constant_time_eq(stored.as_bytes(), provided.as_bytes())
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_code_format_valid() {
        assert!(code_format_valid("123456"));
        assert!(!code_format_valid("12345"));
        assert!(!code_format_valid("12345a"));
        assert!(!code_format_valid("1234567"));
    }

    #[test]
    fn test_codes_match() {
        assert!(codes_match("123456", "123456"));
        assert!(!codes_match("123456", "123457"));
        assert!(!codes_match("123456", "12345"));
    }
}
