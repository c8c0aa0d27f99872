//! Mapping from domain errors to HTTP responses.
//!
//! Verification errors are specific (the caller already holds the session);
//! password-reset request outcomes are flattened to one message in the
//! handler itself so account existence cannot be probed.

use actix_web::HttpResponse;
use validator::ValidationErrors;

use mr_core::errors::{AuthError, DomainError, ResetError, VerificationError};
use mr_shared::types::ApiResponse;

/// Convert a domain error into an HTTP response
pub fn to_response(error: &DomainError) -> HttpResponse {
    match error {
        DomainError::Validation { message } => {
            HttpResponse::BadRequest().json(ApiResponse::<()>::error(message.clone()))
        }
        DomainError::NotFound { resource } => HttpResponse::NotFound()
            .json(ApiResponse::<()>::error(format!("{} not found", resource))),
        DomainError::Internal { .. } => {
            // Internal details stay in the logs
            log::error!("Internal error: {}", error);
            HttpResponse::InternalServerError()
                .json(ApiResponse::<()>::error("Internal server error"))
        }
        DomainError::Verification(e) => verification_response(e),
        DomainError::Reset(e) => reset_response(e),
        DomainError::Auth(e) => auth_response(e),
    }
}

fn verification_response(error: &VerificationError) -> HttpResponse {
    let message = error.to_string();
    match error {
        VerificationError::TokenNotFound => {
            HttpResponse::NotFound().json(ApiResponse::<()>::error(message))
        }
        VerificationError::EmailAlreadyInUse | VerificationError::AlreadyVerified => {
            HttpResponse::Conflict().json(ApiResponse::<()>::error(message))
        }
        VerificationError::CodeExpired
        | VerificationError::CodeMismatch
        | VerificationError::MissingPhoneNumber => {
            HttpResponse::BadRequest().json(ApiResponse::<()>::error(message))
        }
    }
}

fn reset_response(error: &ResetError) -> HttpResponse {
    let message = error.to_string();
    match error {
        // AccountNotFound is handled (and hidden) by the request handler;
        // reaching this arm means a programming error upstream, so answer
        // like an unknown token rather than leaking anything
        ResetError::AccountNotFound | ResetError::TokenNotFound => {
            HttpResponse::NotFound().json(ApiResponse::<()>::error(
                ResetError::TokenNotFound.to_string(),
            ))
        }
        ResetError::TokenExpired => {
            HttpResponse::BadRequest().json(ApiResponse::<()>::error(message))
        }
    }
}

fn auth_response(error: &AuthError) -> HttpResponse {
    let message = error.to_string();
    match error {
        AuthError::InvalidCredentials => {
            HttpResponse::Unauthorized().json(ApiResponse::<()>::error(message))
        }
        AuthError::AccountInactive | AuthError::NotAuthorized => {
            HttpResponse::Forbidden().json(ApiResponse::<()>::error(message))
        }
        AuthError::EmailTaken => HttpResponse::Conflict().json(ApiResponse::<()>::error(message)),
    }
}

/// Convert validator output into a 400 with field messages
pub fn validation_response(errors: &ValidationErrors) -> HttpResponse {
    let details: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field))
            })
        })
        .collect();

    HttpResponse::BadRequest().json(ApiResponse::<()>::error(details.join("; ")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let response = to_response(&DomainError::Verification(VerificationError::TokenNotFound));
        assert_eq!(response.status(), 404);

        let response =
            to_response(&DomainError::Verification(VerificationError::EmailAlreadyInUse));
        assert_eq!(response.status(), 409);

        let response = to_response(&DomainError::Reset(ResetError::TokenExpired));
        assert_eq!(response.status(), 400);

        let response = to_response(&DomainError::Auth(AuthError::InvalidCredentials));
        assert_eq!(response.status(), 401);

        let response = to_response(&DomainError::Internal {
            message: "boom".to_string(),
        });
        assert_eq!(response.status(), 500);
    }
}
