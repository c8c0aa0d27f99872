//! Handler for POST /api/v1/auth/signup

use actix_web::{web, HttpResponse};
use validator::Validate;

use mr_core::repositories::{
    AccountRepository, AdminRepository, FavoriteRepository, ProfileRepository,
};
use mr_core::services::account::NewAccount;
use mr_core::services::notification::{EmailGateway, SmsGateway};
use mr_shared::types::ApiResponse;

use crate::dto::auth::{AccountResponse, SignupRequest};
use crate::handlers::error::{to_response, validation_response};
use crate::state::AppState;

/// Create an account, its profile and the first verification email
pub async fn signup<A, P, F, D, E, S>(
    state: web::Data<AppState<A, P, F, D, E, S>>,
    request: web::Json<SignupRequest>,
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

    let request = request.into_inner();
    let result = state
        .account_service
        .register(NewAccount {
            email: request.email,
            password: request.password,
            first_name: request.first_name,
            last_name: request.last_name,
        })
        .await;

    match result {
        Ok((account, _profile)) => {
            HttpResponse::Created().json(ApiResponse::success(AccountResponse::from(account)))
        }
        Err(error) => to_response(&error),
    }
}
