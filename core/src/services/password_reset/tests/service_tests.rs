//! Unit tests for the password reset service

use chrono::{Duration, Utc};
use std::sync::Arc;

use crate::domain::entities::account::Account;
use crate::domain::entities::profile::Profile;
use crate::errors::{DomainError, ResetError};
use crate::repositories::{
    AccountRepository, MockAccountRepository, MockProfileRepository, ProfileRepository,
};
use crate::services::account::password::verify_password;
use crate::services::notification::mock::MockEmailGateway;
use crate::services::password_reset::{PasswordResetService, PasswordResetServiceConfig};

type TestService =
    PasswordResetService<MockAccountRepository, MockProfileRepository, MockEmailGateway>;

struct Harness {
    service: TestService,
    accounts: Arc<MockAccountRepository>,
    profiles: Arc<MockProfileRepository>,
    email: Arc<MockEmailGateway>,
}

fn harness() -> Harness {
    harness_with_email(MockEmailGateway::new())
}

fn harness_with_email(email: MockEmailGateway) -> Harness {
    let accounts = Arc::new(MockAccountRepository::new());
    let profiles = Arc::new(MockProfileRepository::new());
    let email = Arc::new(email);

    let service = PasswordResetService::new(
        accounts.clone(),
        profiles.clone(),
        email.clone(),
        PasswordResetServiceConfig::default(),
    );

    Harness {
        service,
        accounts,
        profiles,
        email,
    }
}

async fn seed_account(h: &Harness, email: &str) -> Account {
    let account = h
        .accounts
        .create(Account::new(
            email.split('@').next().unwrap().to_string(),
            email.to_string(),
            "$2b$12$oldhash".to_string(),
            "Test".to_string(),
            "User".to_string(),
        ))
        .await
        .unwrap();
    h.profiles.create(Profile::new(account.id)).await.unwrap();
    account
}

#[tokio::test]
async fn test_request_reset_issues_token_and_sends_link() {
    let h = harness();
    seed_account(&h, "user@example.com").await;

    let token = h.service.request_reset("user@example.com").await.unwrap();
    assert_eq!(token.len(), 43);

    let mail = h.email.last_to("user@example.com").unwrap();
    assert!(mail.subject.contains("Reset"));
    assert!(mail.body.contains(&token));
}

#[tokio::test]
async fn test_request_reset_unknown_email() {
    let h = harness();

    let result = h.service.request_reset("nobody@example.com").await;
    assert!(matches!(
        result,
        Err(DomainError::Reset(ResetError::AccountNotFound))
    ));
    assert!(h.email.sent().is_empty());
}

#[tokio::test]
async fn test_consume_reset_token_sets_new_password() {
    let h = harness();
    let account = seed_account(&h, "user@example.com").await;

    let token = h.service.request_reset("user@example.com").await.unwrap();
    h.service.consume_reset_token(&token, "new-password-1").await.unwrap();

    let stored = h.accounts.find_by_id(account.id).await.unwrap().unwrap();
    assert!(verify_password("new-password-1", &stored.password_hash));

    let profile = h.profiles.find_by_account_id(account.id).await.unwrap().unwrap();
    assert!(profile.reset_token.is_none());
    assert!(profile.reset_token_created_at.is_none());
}

#[tokio::test]
async fn test_consume_reset_token_is_single_use() {
    let h = harness();
    seed_account(&h, "user@example.com").await;

    let token = h.service.request_reset("user@example.com").await.unwrap();
    h.service.consume_reset_token(&token, "new-password-1").await.unwrap();

    let second = h.service.consume_reset_token(&token, "other-password").await;
    assert!(matches!(
        second,
        Err(DomainError::Reset(ResetError::TokenNotFound))
    ));
}

#[tokio::test]
async fn test_expired_token_fails_and_is_not_cleared() {
    let h = harness();
    let account = seed_account(&h, "user@example.com").await;

    let token = h.service.request_reset("user@example.com").await.unwrap();

    // Simulate 25 hours passing
    let mut profile = h.profiles.find_by_account_id(account.id).await.unwrap().unwrap();
    profile.reset_token_created_at = Some(Utc::now() - Duration::hours(25));
    h.profiles.update(profile).await.unwrap();

    let result = h.service.consume_reset_token(&token, "new-password-1").await;
    assert!(matches!(
        result,
        Err(DomainError::Reset(ResetError::TokenExpired))
    ));

    // Lazy expiry: the stored token is untouched
    let profile = h.profiles.find_by_account_id(account.id).await.unwrap().unwrap();
    assert_eq!(profile.reset_token.as_deref(), Some(token.as_str()));

    // And the password is unchanged
    let stored = h.accounts.find_by_id(account.id).await.unwrap().unwrap();
    assert_eq!(stored.password_hash, "$2b$12$oldhash");
}

#[tokio::test]
async fn test_validity_boundary() {
    let h = harness();
    let account = seed_account(&h, "user@example.com").await;
    h.service.request_reset("user@example.com").await.unwrap();

    let mut profile = h.profiles.find_by_account_id(account.id).await.unwrap().unwrap();

    profile.reset_token_created_at = Some(Utc::now() - Duration::hours(23) - Duration::minutes(59));
    assert!(h.service.is_reset_token_valid(&profile));

    profile.reset_token_created_at = Some(Utc::now() - Duration::hours(24) - Duration::minutes(1));
    assert!(!h.service.is_reset_token_valid(&profile));
}

#[tokio::test]
async fn test_requesting_again_overwrites_previous_token() {
    let h = harness();
    seed_account(&h, "user@example.com").await;

    let first = h.service.request_reset("user@example.com").await.unwrap();
    let second = h.service.request_reset("user@example.com").await.unwrap();
    assert_ne!(first, second);

    let result = h.service.consume_reset_token(&first, "new-password-1").await;
    assert!(matches!(
        result,
        Err(DomainError::Reset(ResetError::TokenNotFound))
    ));

    h.service.consume_reset_token(&second, "new-password-1").await.unwrap();
}

#[tokio::test]
async fn test_short_password_rejected_before_consumption() {
    let h = harness();
    seed_account(&h, "user@example.com").await;

    let token = h.service.request_reset("user@example.com").await.unwrap();
    let result = h.service.consume_reset_token(&token, "short").await;
    assert!(matches!(result, Err(DomainError::Validation { .. })));

    // Token not consumed by the failed attempt
    h.service.consume_reset_token(&token, "long-enough-1").await.unwrap();
}

#[tokio::test]
async fn test_delivery_failure_still_issues_token() {
    let h = harness_with_email(MockEmailGateway::failing());
    let account = seed_account(&h, "user@example.com").await;

    let token = h.service.request_reset("user@example.com").await.unwrap();

    let profile = h.profiles.find_by_account_id(account.id).await.unwrap().unwrap();
    assert_eq!(profile.reset_token.as_deref(), Some(token.as_str()));
}
