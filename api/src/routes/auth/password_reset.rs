//! Handlers for POST /api/v1/auth/password-reset and
//! POST /api/v1/auth/password-reset/confirm

use actix_web::{web, HttpResponse};
use serde_json::json;
use validator::Validate;

use mr_core::errors::{DomainError, ResetError};
use mr_core::repositories::{
    AccountRepository, AdminRepository, FavoriteRepository, ProfileRepository,
};
use mr_core::services::notification::{EmailGateway, SmsGateway};
use mr_shared::types::ApiResponse;

use crate::dto::auth::{PasswordResetConfirmRequest, PasswordResetRequest};
use crate::handlers::error::{to_response, validation_response};
use crate::state::AppState;

/// Request a password-reset link
///
/// The response is identical whether or not the email belongs to an
/// account, so this endpoint cannot be used to enumerate accounts.
pub async fn request_reset<A, P, F, D, E, S>(
    state: web::Data<AppState<A, P, F, D, E, S>>,
    request: web::Json<PasswordResetRequest>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    P: ProfileRepository + 'static,
    F: FavoriteRepository + 'static,
    D: AdminRepository + 'static,
    E: EmailGateway + 'static,
    S: SmsGateway + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_response(&errors);
    }

    let result = state
        .password_reset_service
        .request_reset(&request.email)
        .await;

    match result {
        Ok(_) | Err(DomainError::Reset(ResetError::AccountNotFound)) => {
            HttpResponse::Ok().json(ApiResponse::success(json!({
                "message":
                    "If an account exists with this email, password reset \
                     instructions have been sent",
            })))
        }
        Err(error) => to_response(&error),
    }
}

/// Consume a reset token and set the new password
pub async fn confirm_reset<A, P, F, D, E, S>(
    state: web::Data<AppState<A, P, F, D, E, S>>,
    request: web::Json<PasswordResetConfirmRequest>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    P: ProfileRepository + 'static,
    F: FavoriteRepository + 'static,
    D: AdminRepository + 'static,
    E: EmailGateway + 'static,
    S: SmsGateway + 'static,
{
    if let Err(errors) = request.validate() {
        return validation_response(&errors);
    }

    match state
        .password_reset_service
        .consume_reset_token(&request.token, &request.password)
        .await
    {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::success(json!({
            "message": "Your password has been reset successfully",
        }))),
        Err(error) => to_response(&error),
    }
}
