//! Application state shared across handlers.

use std::sync::Arc;

use mr_core::repositories::{
    AccountRepository, AdminRepository, FavoriteRepository, ProfileRepository,
};
use mr_core::services::account::AccountService;
use mr_core::services::admin::AdminService;
use mr_core::services::favorites::FavoriteService;
use mr_core::services::notification::{EmailGateway, SmsGateway};
use mr_core::services::password_reset::PasswordResetService;
use mr_core::services::verification::VerificationService;

/// Application state holding the wired-up services
pub struct AppState<A, P, F, D, E, S>
where
    A: AccountRepository,
    P: ProfileRepository,
    F: FavoriteRepository,
    D: AdminRepository,
    E: EmailGateway,
    S: SmsGateway,
{
    pub account_service: Arc<AccountService<A, P, E, S>>,
    pub verification_service: Arc<VerificationService<A, P, E, S>>,
    pub password_reset_service: Arc<PasswordResetService<A, P, E>>,
    pub favorite_service: Arc<FavoriteService<F>>,
    pub admin_service: Arc<AdminService<A, D>>,
    pub account_repository: Arc<A>,
    pub profile_repository: Arc<P>,
}
