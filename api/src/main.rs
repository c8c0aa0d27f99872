use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use dotenv::dotenv;
use log::info;
use std::sync::Arc;

use mr_api::{app, middleware, routes};
use mr_infra::database::mysql::{
    MySqlAccountRepository, MySqlAdminRepository, MySqlFavoriteRepository, MySqlProfileRepository,
};
use mr_infra::database::create_pool;
use mr_infra::email::create_email_service;
use mr_infra::sms::create_sms_service;
use mr_infra::{EmailGatewayAdapter, SmsGatewayAdapter};
use mr_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting MrMotors API server");

    let config = AppConfig::from_env();
    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    // Database pool and repositories
    let pool = create_pool(&config.database)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    let account_repository = Arc::new(MySqlAccountRepository::new(pool.clone()));
    let profile_repository = Arc::new(MySqlProfileRepository::new(pool.clone()));
    let favorite_repository = Arc::new(MySqlFavoriteRepository::new(pool.clone()));
    let admin_repository = Arc::new(MySqlAdminRepository::new(pool));

    // Notification gateways (mock when unconfigured)
    let email_gateway = Arc::new(EmailGatewayAdapter::new(create_email_service(
        &config.notification.email,
    )));
    let sms_gateway = Arc::new(SmsGatewayAdapter::new(create_sms_service(
        &config.notification.sms,
    )));

    let state = web::Data::new(app::build_state(
        account_repository,
        profile_repository,
        favorite_repository,
        admin_repository,
        email_gateway,
        sms_gateway,
        config.site.clone(),
    ));

    // Bootstrap admin grants from configuration
    if !config.site.seed_admin_emails.is_empty() {
        if let Err(e) = state
            .admin_service
            .seed_admins(&config.site.seed_admin_emails)
            .await
        {
            log::error!("Failed to seed admin grants: {}", e);
        }
    }

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(middleware::cors::create_cors())
            .app_data(state.clone())
            .route("/health", web::get().to(health_check))
            .configure(
                routes::configure::<
                    MySqlAccountRepository,
                    MySqlProfileRepository,
                    MySqlFavoriteRepository,
                    MySqlAdminRepository,
                    EmailGatewayAdapter,
                    SmsGatewayAdapter,
                >,
            )
            .default_service(web::route().to(|| async {
                HttpResponse::NotFound().json(serde_json::json!({
                    "error": "not_found",
                    "message": "The requested resource was not found"
                }))
            }))
    })
    .bind(&bind_address)?
    .run()
    .await
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "mrmotors-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
