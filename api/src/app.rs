//! Application wiring: build the shared state from repositories and
//! gateways.

use std::sync::Arc;

use mr_core::repositories::{
    AccountRepository, AdminRepository, FavoriteRepository, ProfileRepository,
};
use mr_core::services::account::AccountService;
use mr_core::services::admin::AdminService;
use mr_core::services::favorites::FavoriteService;
use mr_core::services::notification::{EmailGateway, SmsGateway};
use mr_core::services::password_reset::{PasswordResetService, PasswordResetServiceConfig};
use mr_core::services::verification::{VerificationService, VerificationServiceConfig};
use mr_shared::config::SiteConfig;

use crate::state::AppState;

/// Wire the domain services around the given repositories and gateways
pub fn build_state<A, P, F, D, E, S>(
    account_repository: Arc<A>,
    profile_repository: Arc<P>,
    favorite_repository: Arc<F>,
    admin_repository: Arc<D>,
    email_gateway: Arc<E>,
    sms_gateway: Arc<S>,
    site: SiteConfig,
) -> AppState<A, P, F, D, E, S>
where
    A: AccountRepository + 'static,
    P: ProfileRepository + 'static,
    F: FavoriteRepository + 'static,
    D: AdminRepository + 'static,
    E: EmailGateway + 'static,
    S: SmsGateway + 'static,
{
    let verification_service = Arc::new(VerificationService::new(
        account_repository.clone(),
        profile_repository.clone(),
        email_gateway.clone(),
        sms_gateway,
        VerificationServiceConfig::new(site.clone()),
    ));

    let account_service = Arc::new(AccountService::new(
        account_repository.clone(),
        profile_repository.clone(),
        verification_service.clone(),
    ));

    let password_reset_service = Arc::new(PasswordResetService::new(
        account_repository.clone(),
        profile_repository.clone(),
        email_gateway,
        PasswordResetServiceConfig { site },
    ));

    let favorite_service = Arc::new(FavoriteService::new(favorite_repository));
    let admin_service = Arc::new(AdminService::new(
        account_repository.clone(),
        admin_repository,
    ));

    AppState {
        account_service,
        verification_service,
        password_reset_service,
        favorite_service,
        admin_service,
        account_repository,
        profile_repository,
    }
}
