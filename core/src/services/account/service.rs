//! Account service implementation

use std::sync::Arc;
use uuid::Uuid;

use mr_shared::utils::validation::{is_valid_email, is_valid_phone_number, mask_email};

use crate::domain::entities::account::Account;
use crate::domain::entities::profile::Profile;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::{AccountRepository, ProfileRepository};
use crate::services::notification::{EmailGateway, SmsGateway};
use crate::services::verification::VerificationService;

use super::password::{hash_password, validate_password, verify_password};

/// Data required to open an account
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Contact-detail changes; `None` fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct ContactUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    /// `Some("")` clears the phone number
    pub phone_number: Option<String>,
}

/// Outcome of a resend-verification request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResendOutcome {
    /// The account is Google-linked; the email was marked verified directly
    VerifiedViaProvider,
    /// Nothing to do, the email is already verified
    AlreadyVerified,
    /// A fresh verification link was issued and mailed
    TokenSent,
}

/// Account service orchestrating signup, login and contact updates
///
/// Profile creation happens here, explicitly, right after the account row
/// is created. Nothing else creates profiles.
pub struct AccountService<A, P, E, S>
where
    A: AccountRepository,
    P: ProfileRepository,
    E: EmailGateway,
    S: SmsGateway,
{
    /// Account repository
    account_repository: Arc<A>,
    /// Profile repository
    profile_repository: Arc<P>,
    /// Verification service used for token issuance on signup and email
    /// change
    verification_service: Arc<VerificationService<A, P, E, S>>,
}

impl<A, P, E, S> AccountService<A, P, E, S>
where
    A: AccountRepository,
    P: ProfileRepository,
    E: EmailGateway,
    S: SmsGateway,
{
    /// Create a new account service
    pub fn new(
        account_repository: Arc<A>,
        profile_repository: Arc<P>,
        verification_service: Arc<VerificationService<A, P, E, S>>,
    ) -> Self {
        Self {
            account_repository,
            profile_repository,
            verification_service,
        }
    }

    /// Open a new account
    ///
    /// Creates the account, explicitly creates its profile, then issues and
    /// mails the verification link. A failed email send does not fail the
    /// signup.
    pub async fn register(&self, new_account: NewAccount) -> DomainResult<(Account, Profile)> {
        if !is_valid_email(&new_account.email) {
            return Err(DomainError::Validation {
                message: "Invalid email address".to_string(),
            });
        }
        validate_password(&new_account.password)?;

        let username = self.derive_username(&new_account.email).await?;
        let password_hash = hash_password(&new_account.password)?;

        let account = self
            .account_repository
            .create(Account::new(
                username,
                new_account.email,
                password_hash,
                new_account.first_name,
                new_account.last_name,
            ))
            .await?;

        // Profile creation is part of account creation, not a side effect
        // of persistence
        self.profile_repository
            .create(Profile::new(account.id))
            .await?;

        tracing::info!(
            account_id = %account.id,
            email = %mask_email(&account.email),
            event = "account_created",
            "Account registered"
        );

        self.verification_service.issue_email_token(account.id).await?;

        let profile = self
            .profile_repository
            .find_by_account_id(account.id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "Profile".to_string(),
            })?;

        Ok((account, profile))
    }

    /// Authenticate by email and password
    ///
    /// Unknown email and wrong password are indistinguishable to the
    /// caller.
    pub async fn authenticate(&self, email: &str, password: &str) -> DomainResult<Account> {
        let mut account = self
            .account_repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(password, &account.password_hash) {
            tracing::warn!(
                email = %mask_email(email),
                event = "login_failed",
                "Failed login attempt"
            );
            return Err(AuthError::InvalidCredentials.into());
        }

        if !account.is_active {
            return Err(AuthError::AccountInactive.into());
        }

        account.update_last_login();
        let account = self.account_repository.update(account).await?;

        tracing::info!(
            account_id = %account.id,
            event = "login",
            "Account logged in"
        );

        Ok(account)
    }

    /// Resend the verification email, or short-circuit when possible
    pub async fn resend_verification(&self, account_id: Uuid) -> DomainResult<ResendOutcome> {
        let account = self
            .account_repository
            .find_by_id(account_id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "Account".to_string(),
            })?;
        let profile = self
            .profile_repository
            .find_by_account_id(account_id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "Profile".to_string(),
            })?;

        if profile.email_verified {
            return Ok(ResendOutcome::AlreadyVerified);
        }

        if account.google_linked {
            self.verification_service
                .mark_verified_via_provider(account_id)
                .await?;
            return Ok(ResendOutcome::VerifiedViaProvider);
        }

        self.verification_service.issue_email_token(account_id).await?;
        Ok(ResendOutcome::TokenSent)
    }

    /// Update names, email and phone number
    ///
    /// An email change resets email verification and issues a fresh link;
    /// a phone change resets phone verification.
    pub async fn update_contact(
        &self,
        account_id: Uuid,
        update: ContactUpdate,
    ) -> DomainResult<Account> {
        let mut account = self
            .account_repository
            .find_by_id(account_id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "Account".to_string(),
            })?;
        let mut profile = self
            .profile_repository
            .find_by_account_id(account_id)
            .await?
            .ok_or(DomainError::NotFound {
                resource: "Profile".to_string(),
            })?;

        if let Some(first_name) = update.first_name {
            account.first_name = first_name.trim().to_string();
        }
        if let Some(last_name) = update.last_name {
            account.last_name = last_name.trim().to_string();
        }

        let mut email_changed = false;
        if let Some(email) = update.email {
            let email = email.trim().to_string();
            if email != account.email {
                if !is_valid_email(&email) {
                    return Err(DomainError::Validation {
                        message: "Invalid email address".to_string(),
                    });
                }
                if self
                    .account_repository
                    .email_taken_by_other(&email, account.id)
                    .await?
                {
                    return Err(AuthError::EmailTaken.into());
                }

                account.set_email(email);
                profile.reset_email_verification();
                email_changed = true;
            }
        }

        if let Some(phone) = update.phone_number {
            let phone = phone.trim().to_string();
            if phone.is_empty() {
                profile.set_phone_number(None);
            } else {
                if !is_valid_phone_number(&phone) {
                    return Err(DomainError::Validation {
                        message: "Phone number must be in E.164 format".to_string(),
                    });
                }
                profile.set_phone_number(Some(phone));
            }
        }

        let account = self.account_repository.update(account).await?;
        self.profile_repository.update(profile).await?;

        if email_changed {
            tracing::info!(
                account_id = %account.id,
                event = "email_changed",
                "Email changed; verification reset"
            );
            self.verification_service.issue_email_token(account.id).await?;
        }

        Ok(account)
    }

    /// Derive a unique username from the email local part, suffixing a
    /// counter on collision
    async fn derive_username(&self, email: &str) -> DomainResult<String> {
        let base = email
            .split('@')
            .next()
            .unwrap_or(email)
            .to_lowercase();

        let mut candidate = base.clone();
        let mut counter = 1u32;
        while self.account_repository.username_exists(&candidate).await? {
            candidate = format!("{}{}", base, counter);
            counter += 1;
        }
        Ok(candidate)
    }
}
