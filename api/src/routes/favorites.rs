//! Handlers for /api/v1/favorites

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use mr_core::repositories::{
    AccountRepository, AdminRepository, FavoriteRepository, ProfileRepository,
};
use mr_core::services::favorites::SaveFavorite;
use mr_core::services::notification::{EmailGateway, SmsGateway};
use mr_shared::types::ApiResponse;

use crate::dto::favorites::{AddFavoriteRequest, FavoriteIdsResponse, FavoriteResponse};
use crate::handlers::error::{to_response, validation_response};
use crate::state::AppState;

/// List an account's favorites, newest first
pub async fn list_favorites<A, P, F, D, E, S>(
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
    match state.favorite_service.list(path.into_inner()).await {
        Ok(favorites) => {
            let favorites: Vec<FavoriteResponse> =
                favorites.into_iter().map(FavoriteResponse::from).collect();
            HttpResponse::Ok().json(ApiResponse::success(favorites))
        }
        Err(error) => to_response(&error),
    }
}

/// Just the favorited car ids
pub async fn favorite_ids<A, P, F, D, E, S>(
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
    match state.favorite_service.ids(path.into_inner()).await {
        Ok(favorite_ids) => {
            HttpResponse::Ok().json(ApiResponse::success(FavoriteIdsResponse { favorite_ids }))
        }
        Err(error) => to_response(&error),
    }
}

/// Save a car to the favorites list
pub async fn add_favorite<A, P, F, D, E, S>(
    state: web::Data<AppState<A, P, F, D, E, S>>,
    path: web::Path<Uuid>,
    request: web::Json<AddFavoriteRequest>,
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
        .favorite_service
        .add(
            path.into_inner(),
            SaveFavorite {
                car_id: request.car_id,
                car_title: request.car_title,
                car_price: request.car_price,
                car_image_url: request.car_image_url,
            },
        )
        .await;

    match result {
        Ok(favorite) => {
            HttpResponse::Created().json(ApiResponse::success(FavoriteResponse::from(favorite)))
        }
        Err(error) => to_response(&error),
    }
}

/// Remove a car from the favorites list
pub async fn remove_favorite<A, P, F, D, E, S>(
    state: web::Data<AppState<A, P, F, D, E, S>>,
    path: web::Path<(Uuid, String)>,
) -> HttpResponse
where
    A: AccountRepository + 'static,
    P: ProfileRepository + 'static,
    F: FavoriteRepository + 'static,
    D: AdminRepository + 'static,
    E: EmailGateway + 'static,
    S: SmsGateway + 'static,
{
    let (account_id, car_id) = path.into_inner();

    match state.favorite_service.remove(account_id, &car_id).await {
        Ok(removed) => HttpResponse::Ok().json(ApiResponse::success(
            serde_json::json!({ "removed": removed }),
        )),
        Err(error) => to_response(&error),
    }
}
