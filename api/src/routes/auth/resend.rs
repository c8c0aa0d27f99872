//! Handler for POST /api/v1/auth/resend-verification

use actix_web::{web, HttpResponse};

use mr_core::repositories::{
    AccountRepository, AdminRepository, FavoriteRepository, ProfileRepository,
};
use mr_core::services::account::ResendOutcome;
use mr_core::services::notification::{EmailGateway, SmsGateway};
use mr_shared::types::ApiResponse;

use crate::dto::auth::{AccountIdRequest, ResendResponse};
use crate::handlers::error::to_response;
use crate::state::AppState;

/// Resend the verification email (or resolve it without one)
pub async fn resend_verification<A, P, F, D, E, S>(
    state: web::Data<AppState<A, P, F, D, E, S>>,
    request: web::Json<AccountIdRequest>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    P: ProfileRepository + 'static,
    F: FavoriteRepository + 'static,
    D: AdminRepository + 'static,
    E: EmailGateway + 'static,
    S: SmsGateway + 'static,
{
    match state
        .account_service
        .resend_verification(request.account_id)
        .await
    {
        Ok(outcome) => {
            let outcome = match outcome {
                ResendOutcome::VerifiedViaProvider => "verified_via_provider",
                ResendOutcome::AlreadyVerified => "already_verified",
                ResendOutcome::TokenSent => "sent",
            };
            HttpResponse::Ok().json(ApiResponse::success(ResendResponse {
                outcome: outcome.to_string(),
            }))
        }
        Err(error) => to_response(&error),
    }
}
