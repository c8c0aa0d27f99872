//! End-to-end lifecycle tests over the public crate API: signup through
//! verification and password reset, using the in-memory repositories and
//! recording gateways.

use std::sync::Arc;

use chrono::{Duration, Utc};

use mr_core::errors::{DomainError, ResetError, VerificationError};
use mr_core::repositories::{
    AccountRepository, MockAccountRepository, MockAdminRepository, MockProfileRepository,
    ProfileRepository,
};
use mr_core::services::account::password::verify_password;
use mr_core::services::account::{AccountService, NewAccount};
use mr_core::services::admin::AdminService;
use mr_core::services::notification::mock::{MockEmailGateway, MockSmsGateway};
use mr_core::services::password_reset::{PasswordResetService, PasswordResetServiceConfig};
use mr_core::services::verification::{VerificationService, VerificationServiceConfig};

struct World {
    accounts: Arc<MockAccountRepository>,
    profiles: Arc<MockProfileRepository>,
    email: Arc<MockEmailGateway>,
    account_service:
        AccountService<MockAccountRepository, MockProfileRepository, MockEmailGateway, MockSmsGateway>,
    verification_service: Arc<
        VerificationService<
            MockAccountRepository,
            MockProfileRepository,
            MockEmailGateway,
            MockSmsGateway,
        >,
    >,
    reset_service:
        PasswordResetService<MockAccountRepository, MockProfileRepository, MockEmailGateway>,
}

fn world() -> World {
    let accounts = Arc::new(MockAccountRepository::new());
    let profiles = Arc::new(MockProfileRepository::new());
    let email = Arc::new(MockEmailGateway::new());
    let sms = Arc::new(MockSmsGateway::new());

    let verification_service = Arc::new(VerificationService::new(
        accounts.clone(),
        profiles.clone(),
        email.clone(),
        sms.clone(),
        VerificationServiceConfig::default(),
    ));
    let account_service =
        AccountService::new(accounts.clone(), profiles.clone(), verification_service.clone());
    let reset_service = PasswordResetService::new(
        accounts.clone(),
        profiles.clone(),
        email.clone(),
        PasswordResetServiceConfig::default(),
    );

    World {
        accounts,
        profiles,
        email,
        account_service,
        verification_service,
        reset_service,
    }
}

fn signup(email: &str) -> NewAccount {
    NewAccount {
        email: email.to_string(),
        password: "initial-password".to_string(),
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
    }
}

#[tokio::test]
async fn signup_then_verify_via_emailed_link() {
    let w = world();

    let (account, profile) = w.account_service.register(signup("jane@example.com")).await.unwrap();
    let token = profile.verification_token.unwrap();

    // The emailed body carries the same token we can consume
    let mail = w.email.last_to("jane@example.com").unwrap();
    assert!(mail.body.contains(&token));

    let verified = w.verification_service.verify_by_token(&token).await.unwrap();
    assert!(verified.email_verified);
    assert_eq!(verified.account_id, account.id);

    // The link is dead afterwards
    let again = w.verification_service.verify_by_token(&token).await;
    assert!(matches!(
        again,
        Err(DomainError::Verification(VerificationError::TokenNotFound))
    ));
}

#[tokio::test]
async fn full_password_reset_flow() {
    let w = world();
    let (account, _) = w.account_service.register(signup("user@example.com")).await.unwrap();

    let token = w.reset_service.request_reset("user@example.com").await.unwrap();
    w.reset_service
        .consume_reset_token(&token, "brand-new-password")
        .await
        .unwrap();

    // Old password no longer works, new one does
    let old = w
        .account_service
        .authenticate("user@example.com", "initial-password")
        .await;
    assert!(old.is_err());

    let fresh = w
        .account_service
        .authenticate("user@example.com", "brand-new-password")
        .await
        .unwrap();
    assert_eq!(fresh.id, account.id);

    let stored = w.accounts.find_by_id(account.id).await.unwrap().unwrap();
    assert!(verify_password("brand-new-password", &stored.password_hash));
}

#[tokio::test]
async fn reset_token_expires_after_24_hours_and_stays_in_place() {
    let w = world();
    let (account, _) = w.account_service.register(signup("user@example.com")).await.unwrap();

    let token = w.reset_service.request_reset("user@example.com").await.unwrap();

    // Simulate 25 hours
    let mut profile = w.profiles.find_by_account_id(account.id).await.unwrap().unwrap();
    profile.reset_token_created_at = Some(Utc::now() - Duration::hours(25));
    w.profiles.update(profile).await.unwrap();

    let result = w
        .reset_service
        .consume_reset_token(&token, "brand-new-password")
        .await;
    assert!(matches!(
        result,
        Err(DomainError::Reset(ResetError::TokenExpired))
    ));

    let profile = w.profiles.find_by_account_id(account.id).await.unwrap().unwrap();
    assert_eq!(profile.reset_token.as_deref(), Some(token.as_str()));
}

#[tokio::test]
async fn duplicate_email_can_never_verify_twice() {
    let w = world();

    let (_, profile_a) = w.account_service.register(signup("shared@example.com")).await.unwrap();
    w.verification_service
        .verify_by_token(profile_a.verification_token.as_deref().unwrap())
        .await
        .unwrap();

    // Second signup with the same address succeeds, but verification fails
    let (_, profile_b) = w.account_service.register(signup("shared@example.com")).await.unwrap();
    let result = w
        .verification_service
        .verify_by_token(profile_b.verification_token.as_deref().unwrap())
        .await;
    assert!(matches!(
        result,
        Err(DomainError::Verification(VerificationError::EmailAlreadyInUse))
    ));
}

#[tokio::test]
async fn admin_seed_uses_grant_table_as_source_of_truth() {
    let w = world();
    let admins = Arc::new(MockAdminRepository::new());
    let admin_service = AdminService::new(w.accounts.clone(), admins);

    let (account, _) = w.account_service.register(signup("boss@example.com")).await.unwrap();
    assert!(!admin_service.is_admin(account.id).await.unwrap());

    admin_service
        .seed_admins(&["boss@example.com".to_string()])
        .await
        .unwrap();
    assert!(admin_service.is_admin(account.id).await.unwrap());
}
