//! Handlers for POST /api/v1/auth/phone/send-code and
//! POST /api/v1/auth/phone/verify-code

use actix_web::{web, HttpResponse};
use serde_json::json;
use validator::Validate;

use mr_core::repositories::{
    AccountRepository, AdminRepository, FavoriteRepository, ProfileRepository,
};
use mr_core::services::notification::{EmailGateway, SmsGateway};
use mr_shared::types::ApiResponse;

use crate::dto::auth::{AccountIdRequest, VerifyCodeRequest, VerifyCodeResponse};
use crate::handlers::error::{to_response, validation_response};
use crate::state::AppState;

/// Send a phone-verification code to the number on file
pub async fn send_phone_code<A, P, F, D, E, S>(
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
        .verification_service
        .issue_phone_code(request.account_id)
        .await
    {
        Ok(_issued) => HttpResponse::Ok().json(ApiResponse::success(json!({
            "message": "Verification code sent",
        }))),
        Err(error) => to_response(&error),
    }
}

/// Check a phone-verification code
pub async fn verify_phone_code<A, P, F, D, E, S>(
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
        .verify_phone_code(request.account_id, &request.code)
        .await
    {
        Ok(verified) => {
            HttpResponse::Ok().json(ApiResponse::success(VerifyCodeResponse { verified }))
        }
        Err(error) => to_response(&error),
    }
}
