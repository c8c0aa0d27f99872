//! Handlers for /api/v1/admin

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use mr_core::errors::{AuthError, DomainError};
use mr_core::repositories::{
    AccountRepository, AdminRepository, FavoriteRepository, ProfileRepository,
};
use mr_core::services::notification::{EmailGateway, SmsGateway};
use mr_shared::types::ApiResponse;

use crate::dto::admin::{ActorQuery, AdminGrantResponse, GrantAdminRequest};
use crate::handlers::error::to_response;
use crate::state::AppState;

/// List admin grants; the caller must be an admin
pub async fn list_admins<A, P, F, D, E, S>(
    state: web::Data<AppState<A, P, F, D, E, S>>,
    query: web::Query<ActorQuery>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    P: ProfileRepository + 'static,
    F: FavoriteRepository + 'static,
    D: AdminRepository + 'static,
    E: EmailGateway + 'static,
    S: SmsGateway + 'static,
{
    match state.admin_service.is_admin(query.actor_id).await {
        Ok(true) => {}
        Ok(false) => return to_response(&DomainError::Auth(AuthError::NotAuthorized)),
        Err(error) => return to_response(&error),
    }

    match state.admin_service.list().await {
        Ok(grants) => {
            let grants: Vec<AdminGrantResponse> =
                grants.into_iter().map(AdminGrantResponse::from).collect();
            HttpResponse::Ok().json(ApiResponse::success(grants))
        }
        Err(error) => to_response(&error),
    }
}

/// Grant the admin capability to an account
pub async fn grant_admin<A, P, F, D, E, S>(
    state: web::Data<AppState<A, P, F, D, E, S>>,
    request: web::Json<GrantAdminRequest>,
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
        .admin_service
        .grant(request.actor_id, request.account_id)
        .await
    {
        Ok(grant) => {
            HttpResponse::Created().json(ApiResponse::success(AdminGrantResponse::from(grant)))
        }
        Err(error) => to_response(&error),
    }
}

/// Revoke the admin capability from an account
pub async fn revoke_admin<A, P, F, D, E, S>(
    state: web::Data<AppState<A, P, F, D, E, S>>,
    path: web::Path<Uuid>,
    query: web::Query<ActorQuery>,
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
        .admin_service
        .revoke(query.actor_id, path.into_inner())
        .await
    {
        Ok(removed) => HttpResponse::Ok().json(ApiResponse::success(
            serde_json::json!({ "removed": removed }),
        )),
        Err(error) => to_response(&error),
    }
}
