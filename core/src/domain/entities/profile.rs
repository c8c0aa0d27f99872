//! Profile entity holding per-account verification and reset state.
//!
//! The profile is the single owner of every outstanding credential: the
//! email verification token, the email/phone verification codes and the
//! password-reset token. Expiry is always computed at check time from the
//! stored timestamps; nothing purges expired state in the background.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::{DateTime, Duration, Utc};
use rand::{rngs::OsRng, Rng, RngCore};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of numeric verification codes
pub const CODE_LENGTH: usize = 6;

/// Verification codes expire after this many minutes
pub const CODE_EXPIRATION_MINUTES: i64 = 10;

/// Password-reset tokens expire after this many hours
pub const RESET_TOKEN_EXPIRATION_HOURS: i64 = 24;

/// Entropy of opaque tokens in bytes
pub const TOKEN_BYTES: usize = 32;

/// Per-account profile with verification and password-reset state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Unique identifier for the profile
    pub id: Uuid,

    /// Owning account
    pub account_id: Uuid,

    /// Phone number on file (E.164), if any
    pub phone_number: Option<String>,

    /// Whether the phone number has been verified
    pub phone_verified: bool,

    /// Whether the email address has been verified
    pub email_verified: bool,

    /// Outstanding email-verification link token
    pub verification_token: Option<String>,

    /// Outstanding email-verification code
    pub verification_code: Option<String>,

    /// When the email-verification code was issued
    pub verification_code_created_at: Option<DateTime<Utc>>,

    /// Outstanding phone-verification code
    pub phone_verification_code: Option<String>,

    /// When the phone-verification code was issued
    pub phone_verification_code_created_at: Option<DateTime<Utc>>,

    /// Outstanding password-reset token
    pub reset_token: Option<String>,

    /// When the password-reset token was issued
    pub reset_token_created_at: Option<DateTime<Utc>>,

    /// Timestamp when the profile was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the profile was last updated
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Creates a fresh profile for an account
    pub fn new(account_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            account_id,
            phone_number: None,
            phone_verified: false,
            email_verified: false,
            verification_token: None,
            verification_code: None,
            verification_code_created_at: None,
            phone_verification_code: None,
            phone_verification_code_created_at: None,
            reset_token: None,
            reset_token_created_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Generates an opaque URL-safe token with `TOKEN_BYTES` of entropy
    pub fn generate_token() -> String {
        let mut bytes = [0u8; TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);
        URL_SAFE_NO_PAD.encode(bytes)
    }

    /// Generates a random numeric code of `CODE_LENGTH` digits
    pub fn generate_code() -> String {
        let code: u32 = OsRng.gen_range(0..1_000_000);
        format!("{:06}", code)
    }

    /// Issues a new email-verification link token
    ///
    /// Overwrites any prior token and clears an outstanding code, keeping
    /// at most one email-verification credential live per profile.
    pub fn issue_verification_token(&mut self) -> String {
        let token = Self::generate_token();
        self.verification_token = Some(token.clone());
        self.verification_code = None;
        self.verification_code_created_at = None;
        self.updated_at = Utc::now();
        token
    }

    /// Issues a new email-verification code
    ///
    /// Overwrites any prior code and clears an outstanding link token.
    pub fn issue_verification_code(&mut self) -> String {
        let code = Self::generate_code();
        let now = Utc::now();
        self.verification_code = Some(code.clone());
        self.verification_code_created_at = Some(now);
        self.verification_token = None;
        self.updated_at = now;
        code
    }

    /// Issues a new phone-verification code, overwriting any prior one
    pub fn issue_phone_verification_code(&mut self) -> String {
        let code = Self::generate_code();
        let now = Utc::now();
        self.phone_verification_code = Some(code.clone());
        self.phone_verification_code_created_at = Some(now);
        self.updated_at = now;
        code
    }

    /// Issues a new password-reset token, overwriting any prior one
    pub fn issue_reset_token(&mut self) -> String {
        let token = Self::generate_token();
        let now = Utc::now();
        self.reset_token = Some(token.clone());
        self.reset_token_created_at = Some(now);
        self.updated_at = now;
        token
    }

    /// Marks the email as verified and clears both email credentials
    pub fn mark_email_verified(&mut self) {
        self.email_verified = true;
        self.verification_token = None;
        self.verification_code = None;
        self.verification_code_created_at = None;
        self.updated_at = Utc::now();
    }

    /// Marks the phone as verified and clears the phone credential
    pub fn mark_phone_verified(&mut self) {
        self.phone_verified = true;
        self.phone_verification_code = None;
        self.phone_verification_code_created_at = None;
        self.updated_at = Utc::now();
    }

    /// Clears the password-reset slot after a successful consume
    pub fn clear_reset_token(&mut self) {
        self.reset_token = None;
        self.reset_token_created_at = None;
        self.updated_at = Utc::now();
    }

    /// Stores a new phone number; any previous verification no longer applies
    pub fn set_phone_number(&mut self, phone_number: Option<String>) {
        if self.phone_number != phone_number {
            self.phone_number = phone_number;
            self.phone_verified = false;
            self.phone_verification_code = None;
            self.phone_verification_code_created_at = None;
            self.updated_at = Utc::now();
        }
    }

    /// Resets email verification after the address changed
    pub fn reset_email_verification(&mut self) {
        self.email_verified = false;
        self.verification_token = None;
        self.verification_code = None;
        self.verification_code_created_at = None;
        self.updated_at = Utc::now();
    }

    /// Checks whether the stored email-verification code is still current
    ///
    /// Validity is a pure function of the stored timestamp: a code is
    /// current iff it exists and was issued less than
    /// `CODE_EXPIRATION_MINUTES` ago.
    pub fn is_verification_code_current(&self) -> bool {
        Self::code_is_current(
            self.verification_code.as_deref(),
            self.verification_code_created_at,
        )
    }

    /// Checks whether the stored phone-verification code is still current
    pub fn is_phone_verification_code_current(&self) -> bool {
        Self::code_is_current(
            self.phone_verification_code.as_deref(),
            self.phone_verification_code_created_at,
        )
    }

    /// Checks if the reset token is still valid (24 hours)
    pub fn is_reset_token_valid(&self) -> bool {
        match (&self.reset_token, self.reset_token_created_at) {
            (Some(_), Some(created_at)) => {
                Utc::now() < created_at + Duration::hours(RESET_TOKEN_EXPIRATION_HOURS)
            }
            _ => false,
        }
    }

    fn code_is_current(code: Option<&str>, created_at: Option<DateTime<Utc>>) -> bool {
        match (code, created_at) {
            (Some(_), Some(created_at)) => {
                Utc::now() < created_at + Duration::minutes(CODE_EXPIRATION_MINUTES)
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_profile_is_unverified() {
        let profile = Profile::new(Uuid::new_v4());
        assert!(!profile.email_verified);
        assert!(!profile.phone_verified);
        assert!(profile.verification_token.is_none());
        assert!(profile.reset_token.is_none());
    }

    #[test]
    fn test_generate_token_entropy() {
        let a = Profile::generate_token();
        let b = Profile::generate_token();
        // 32 bytes of base64 without padding is 43 characters
        assert_eq!(a.len(), 43);
        assert_ne!(a, b);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn test_generate_code_format() {
        for _ in 0..100 {
            let code = Profile::generate_code();
            assert_eq!(code.len(), CODE_LENGTH);
            assert!(code.chars().all(|c| c.is_ascii_digit()));
            let num: u32 = code.parse().unwrap();
            assert!(num < 1_000_000);
        }
    }

    #[test]
    fn test_issuing_token_clears_code() {
        let mut profile = Profile::new(Uuid::new_v4());
        profile.issue_verification_code();
        assert!(profile.verification_code.is_some());

        profile.issue_verification_token();
        assert!(profile.verification_token.is_some());
        assert!(profile.verification_code.is_none());
        assert!(profile.verification_code_created_at.is_none());
    }

    #[test]
    fn test_issuing_code_clears_token() {
        let mut profile = Profile::new(Uuid::new_v4());
        profile.issue_verification_token();

        profile.issue_verification_code();
        assert!(profile.verification_code.is_some());
        assert!(profile.verification_token.is_none());
    }

    #[test]
    fn test_issue_overwrites_previous_token() {
        let mut profile = Profile::new(Uuid::new_v4());
        let first = profile.issue_verification_token();
        let second = profile.issue_verification_token();
        assert_ne!(first, second);
        assert_eq!(profile.verification_token.as_deref(), Some(second.as_str()));
    }

    #[test]
    fn test_mark_email_verified_clears_credentials() {
        let mut profile = Profile::new(Uuid::new_v4());
        profile.issue_verification_token();
        profile.mark_email_verified();

        assert!(profile.email_verified);
        assert!(profile.verification_token.is_none());
        assert!(profile.verification_code.is_none());
    }

    #[test]
    fn test_verification_code_expiry_window() {
        let mut profile = Profile::new(Uuid::new_v4());
        profile.issue_verification_code();
        assert!(profile.is_verification_code_current());

        // 9 minutes old: still current
        profile.verification_code_created_at = Some(Utc::now() - Duration::minutes(9));
        assert!(profile.is_verification_code_current());

        // 11 minutes old: expired
        profile.verification_code_created_at = Some(Utc::now() - Duration::minutes(11));
        assert!(!profile.is_verification_code_current());
    }

    #[test]
    fn test_reset_token_validity_boundary() {
        let mut profile = Profile::new(Uuid::new_v4());
        profile.issue_reset_token();

        profile.reset_token_created_at =
            Some(Utc::now() - Duration::hours(23) - Duration::minutes(59));
        assert!(profile.is_reset_token_valid());

        profile.reset_token_created_at =
            Some(Utc::now() - Duration::hours(24) - Duration::minutes(1));
        assert!(!profile.is_reset_token_valid());
    }

    #[test]
    fn test_reset_token_invalid_without_token() {
        let profile = Profile::new(Uuid::new_v4());
        assert!(!profile.is_reset_token_valid());
    }

    #[test]
    fn test_expired_reset_token_is_not_purged() {
        let mut profile = Profile::new(Uuid::new_v4());
        let token = profile.issue_reset_token();
        profile.reset_token_created_at = Some(Utc::now() - Duration::hours(25));

        // The validity check never mutates the slot
        assert!(!profile.is_reset_token_valid());
        assert_eq!(profile.reset_token.as_deref(), Some(token.as_str()));
    }

    #[test]
    fn test_phone_code_format() {
        let mut profile = Profile::new(Uuid::new_v4());
        let code = profile.issue_phone_verification_code();
        assert_eq!(code.len(), 6);
        assert!(code.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_changing_phone_number_resets_verification() {
        let mut profile = Profile::new(Uuid::new_v4());
        profile.set_phone_number(Some("+61412345678".to_string()));
        profile.issue_phone_verification_code();
        profile.mark_phone_verified();
        assert!(profile.phone_verified);

        profile.set_phone_number(Some("+61498765432".to_string()));
        assert!(!profile.phone_verified);
        assert!(profile.phone_verification_code.is_none());
    }

    #[test]
    fn test_same_phone_number_keeps_verification() {
        let mut profile = Profile::new(Uuid::new_v4());
        profile.set_phone_number(Some("+61412345678".to_string()));
        profile.mark_phone_verified();

        profile.set_phone_number(Some("+61412345678".to_string()));
        assert!(profile.phone_verified);
    }

    #[test]
    fn test_serialization_round_trip() {
        let mut profile = Profile::new(Uuid::new_v4());
        profile.issue_verification_token();

        let json = serde_json::to_string(&profile).unwrap();
        let deserialized: Profile = serde_json::from_str(&json).unwrap();
        assert_eq!(profile, deserialized);
    }
}
