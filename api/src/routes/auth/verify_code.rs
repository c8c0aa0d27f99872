//! Handler for POST /api/v1/auth/verify-code

use actix_web::{web, HttpResponse};
use validator::Validate;

use mr_core::repositories::{
    AccountRepository, AdminRepository, FavoriteRepository, ProfileRepository,
};
use mr_core::services::notification::{EmailGateway, SmsGateway};
use mr_shared::types::ApiResponse;

use crate::dto::auth::{VerifyCodeRequest, VerifyCodeResponse};
use crate::handlers::error::{to_response, validation_response};
use crate::state::AppState;

/// Check a manually-entered email verification code
pub async fn verify_code<A, P, F, D, E, S>(
    state: web::Data<AppState<A, P, F, D, E, S>>,
    request: web::Json<VerifyCodeRequest>,
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
        .verification_service
        .verify_by_code(request.account_id, &request.code)
        .await
    {
        Ok(verified) => {
            HttpResponse::Ok().json(ApiResponse::success(VerifyCodeResponse { verified }))
        }
        Err(error) => to_response(&error),
    }
}
