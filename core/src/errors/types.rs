//! Domain-specific error types for verification, reset and account
//! operations.
//!
//! Error messages are plain English; presentation-layer wording (including
//! the enumeration-safe password-reset response) is decided in the API
//! layer.

use thiserror::Error;

/// Email/phone verification errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum VerificationError {
    /// No profile holds the presented token (unknown, already consumed,
    /// or lost a consumption race)
    #[error("Invalid verification link")]
    TokenNotFound,

    #[error("Verification code expired")]
    CodeExpired,

    #[error("Invalid verification code")]
    CodeMismatch,

    /// The email is already verified under a different account
    #[error("Email already in use by a verified account")]
    EmailAlreadyInUse,

    #[error("Email already verified")]
    AlreadyVerified,

    /// Phone verification requested without a phone number on file
    #[error("No phone number on file")]
    MissingPhoneNumber,
}

/// Password-reset errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ResetError {
    /// No account matches the email a reset was requested for. Never
    /// surfaced verbatim to clients.
    #[error("No account with this email")]
    AccountNotFound,

    #[error("Invalid password reset link")]
    TokenNotFound,

    #[error("Password reset link expired")]
    TokenExpired,
}

/// Authentication and account-management errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    /// Unknown email or wrong password; deliberately indistinguishable
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Account is inactive")]
    AccountInactive,

    #[error("This email is already in use")]
    EmailTaken,

    #[error("Not authorized")]
    NotAuthorized,
}

/// Notification delivery errors. Non-fatal by contract: callers log and
/// swallow these; credential issuance is never rolled back over delivery.
#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("Email delivery failed: {0}")]
    Email(String),

    #[error("SMS delivery failed: {0}")]
    Sms(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verification_error_messages() {
        assert_eq!(
            VerificationError::TokenNotFound.to_string(),
            "Invalid verification link"
        );
        assert_eq!(
            VerificationError::EmailAlreadyInUse.to_string(),
            "Email already in use by a verified account"
        );
    }

    #[test]
    fn test_credentials_error_does_not_name_the_cause() {
        // Unknown email and wrong password must read identically
        assert_eq!(AuthError::InvalidCredentials.to_string(), "Invalid email or password");
    }
}
