//! Handlers for GET/PUT /api/v1/profile/{account_id}

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use mr_core::errors::DomainError;
use mr_core::repositories::{
    AccountRepository, AdminRepository, FavoriteRepository, ProfileRepository,
};
use mr_core::services::account::ContactUpdate;
use mr_core::services::notification::{EmailGateway, SmsGateway};
use mr_shared::types::ApiResponse;

use crate::dto::profile::{ProfileResponse, UpdateProfileRequest};
use crate::handlers::error::{to_response, validation_response};
use crate::state::AppState;

/// Fetch the combined account + verification state view
pub async fn get_profile<A, P, F, D, E, S>(
    state: web::Data<AppState<A, P, F, D, E, S>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    P: ProfileRepository + 'static,
    F: FavoriteRepository + 'static,
    D: AdminRepository + 'static,
    E: EmailGateway + 'static,
    S: SmsGateway + 'static,
{
    let account_id = path.into_inner();

    let account = match state.account_repository.find_by_id(account_id).await {
        Ok(Some(account)) => account,
        Ok(None) => {
            return to_response(&DomainError::NotFound {
                resource: "Account".to_string(),
            })
        }
        Err(error) => return to_response(&error),
    };

    match state.profile_repository.find_by_account_id(account_id).await {
        Ok(Some(profile)) => HttpResponse::Ok()
            .json(ApiResponse::success(ProfileResponse::from_parts(account, profile))),
        Ok(None) => to_response(&DomainError::NotFound {
            resource: "Profile".to_string(),
        }),
        Err(error) => to_response(&error),
    }
}

/// Update contact details; email changes restart verification
pub async fn update_profile<A, P, F, D, E, S>(
    state: web::Data<AppState<A, P, F, D, E, S>>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateProfileRequest>,
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

    let account_id = path.into_inner();
    let request = request.into_inner();

    let result = state
        .account_service
        .update_contact(
            account_id,
            ContactUpdate {
                first_name: request.first_name,
                last_name: request.last_name,
                email: request.email,
                phone_number: request.phone_number,
            },
        )
        .await;

    let account = match result {
        Ok(account) => account,
        Err(error) => return to_response(&error),
    };

    match state.profile_repository.find_by_account_id(account_id).await {
        Ok(Some(profile)) => HttpResponse::Ok()
            .json(ApiResponse::success(ProfileResponse::from_parts(account, profile))),
        Ok(None) => to_response(&DomainError::NotFound {
            resource: "Profile".to_string(),
        }),
        Err(error) => to_response(&error),
    }
}
