//! Handler for POST /api/v1/auth/login

use actix_web::{web, HttpResponse};
use validator::Validate;

use mr_core::repositories::{
    AccountRepository, AdminRepository, FavoriteRepository, ProfileRepository,
};
use mr_core::services::notification::{EmailGateway, SmsGateway};
use mr_shared::types::ApiResponse;

use crate::dto::auth::{AccountResponse, LoginRequest};
use crate::handlers::error::{to_response, validation_response};
use crate::state::AppState;

/// Check credentials and return the account summary
pub async fn login<A, P, F, D, E, S>(
    state: web::Data<AppState<A, P, F, D, E, S>>,
    request: web::Json<LoginRequest>,
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
        .account_service
        .authenticate(&request.email, &request.password)
        .await
    {
        Ok(account) => {
            HttpResponse::Ok().json(ApiResponse::success(AccountResponse::from(account)))
        }
        Err(error) => to_response(&error),
    }
}
