//! Route registration.

pub mod admin;
pub mod auth;
pub mod favorites;
pub mod profile;

use actix_web::web;

use mr_core::repositories::{
    AccountRepository, AdminRepository, FavoriteRepository, ProfileRepository,
};
use mr_core::services::notification::{EmailGateway, SmsGateway};

/// Register all /api/v1 routes
pub fn configure<A, P, F, D, E, S>(cfg: &mut web::ServiceConfig)
where
    A: AccountRepository + 'static,
    P: ProfileRepository + 'static,
    F: FavoriteRepository + 'static,
    D: AdminRepository + 'static,
    E: EmailGateway + 'static,
    S: SmsGateway + 'static,
{
    cfg.service(
        web::scope("/api/v1")
            .service(
                web::scope("/auth")
                    .route("/signup", web::post().to(auth::signup::signup::<A, P, F, D, E, S>))
                    .route("/login", web::post().to(auth::login::login::<A, P, F, D, E, S>))
                    .route(
                        "/verify-email/{token}",
                        web::get().to(auth::verify_email::verify_email::<A, P, F, D, E, S>),
                    )
                    .route(
                        "/verify-code",
                        web::post().to(auth::verify_code::verify_code::<A, P, F, D, E, S>),
                    )
                    .route(
                        "/resend-verification",
                        web::post().to(auth::resend::resend_verification::<A, P, F, D, E, S>),
                    )
                    .route(
                        "/phone/send-code",
                        web::post().to(auth::phone::send_phone_code::<A, P, F, D, E, S>),
                    )
                    .route(
                        "/phone/verify-code",
                        web::post().to(auth::phone::verify_phone_code::<A, P, F, D, E, S>),
                    )
                    .route(
                        "/password-reset",
                        web::post()
                            .to(auth::password_reset::request_reset::<A, P, F, D, E, S>),
                    )
                    .route(
                        "/password-reset/confirm",
                        web::post()
                            .to(auth::password_reset::confirm_reset::<A, P, F, D, E, S>),
                    ),
            )
            .service(
                web::scope("/profile")
                    .route(
                        "/{account_id}",
                        web::get().to(profile::get_profile::<A, P, F, D, E, S>),
                    )
                    .route(
                        "/{account_id}",
                        web::put().to(profile::update_profile::<A, P, F, D, E, S>),
                    ),
            )
            .service(
                web::scope("/favorites")
                    .route(
                        "/{account_id}",
                        web::get().to(favorites::list_favorites::<A, P, F, D, E, S>),
                    )
                    .route(
                        "/{account_id}/ids",
                        web::get().to(favorites::favorite_ids::<A, P, F, D, E, S>),
                    )
                    .route(
                        "/{account_id}",
                        web::post().to(favorites::add_favorite::<A, P, F, D, E, S>),
                    )
                    .route(
                        "/{account_id}/{car_id}",
                        web::delete().to(favorites::remove_favorite::<A, P, F, D, E, S>),
                    ),
            )
            .service(
                web::scope("/admin")
                    .route("/admins", web::get().to(admin::list_admins::<A, P, F, D, E, S>))
                    .route("/admins", web::post().to(admin::grant_admin::<A, P, F, D, E, S>))
                    .route(
                        "/admins/{account_id}",
                        web::delete().to(admin::revoke_admin::<A, P, F, D, E, S>),
                    ),
            ),
    );
}
