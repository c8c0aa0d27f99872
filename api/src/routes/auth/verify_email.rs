//! Handler for GET /api/v1/auth/verify-email/{token}

use actix_web::{web, HttpResponse};
use serde_json::json;

use mr_core::repositories::{
    AccountRepository, AdminRepository, FavoriteRepository, ProfileRepository,
};
use mr_core::services::notification::{EmailGateway, SmsGateway};
use mr_shared::types::ApiResponse;

use crate::handlers::error::to_response;
use crate::state::AppState;

/// Consume an emailed verification link token
pub async fn verify_email<A, P, F, D, E, S>(
    state: web::Data<AppState<A, P, F, D, E, S>>,
    path: web::Path<String>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    P: ProfileRepository + 'static,
    F: FavoriteRepository + 'static,
    D: AdminRepository + 'static,
    E: EmailGateway + 'static,
    S: SmsGateway + 'static,
{
    let token = path.into_inner();

    match state.verification_service.verify_by_token(&token).await {
        Ok(profile) => HttpResponse::Ok().json(ApiResponse::success(json!({
            "message": "Your email has been verified successfully",
            "account_id": profile.account_id,
        }))),
        Err(error) => to_response(&error),
    }
}
