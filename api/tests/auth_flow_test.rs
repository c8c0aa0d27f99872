//! HTTP-level tests of the auth flows over mock repositories and gateways.

use std::sync::Arc;

use actix_web::{test, web, App};
use serde_json::{json, Value};

use mr_api::{app, routes};
use mr_core::repositories::{
    MockAccountRepository, MockAdminRepository, MockFavoriteRepository, MockProfileRepository,
};
use mr_core::services::notification::mock::{MockEmailGateway, MockSmsGateway};
use mr_shared::config::SiteConfig;

type TestState = mr_api::state::AppState<
    MockAccountRepository,
    MockProfileRepository,
    MockFavoriteRepository,
    MockAdminRepository,
    MockEmailGateway,
    MockSmsGateway,
>;

fn test_state() -> (web::Data<TestState>, Arc<MockEmailGateway>) {
    let email = Arc::new(MockEmailGateway::new());
    let state = web::Data::new(app::build_state(
        Arc::new(MockAccountRepository::new()),
        Arc::new(MockProfileRepository::new()),
        Arc::new(MockFavoriteRepository::new()),
        Arc::new(MockAdminRepository::new()),
        email.clone(),
        Arc::new(MockSmsGateway::new()),
        SiteConfig::default(),
    ));
    (state, email)
}

macro_rules! test_app {
    ($state:expr) => {
        test::init_service(
            App::new().app_data($state.clone()).configure(
                routes::configure::<
                    MockAccountRepository,
                    MockProfileRepository,
                    MockFavoriteRepository,
                    MockAdminRepository,
                    MockEmailGateway,
                    MockSmsGateway,
                >,
            ),
        )
        .await
    };
}

fn extract_token(body: &str) -> String {
    // The verification link is the only absolute URL in the message body
    let line = body
        .lines()
        .find(|l| l.contains("/verify-email/"))
        .expect("verification link in email body");
    line.trim()
        .rsplit("/verify-email/")
        .next()
        .unwrap()
        .trim_end_matches('/')
        .to_string()
}

#[actix_rt::test]
async fn signup_verify_and_login() {
    let (state, email) = test_state();
    let app = test_app!(state);

    // Sign up
    let request = test::TestRequest::post()
        .uri("/api/v1/auth/signup")
        .set_json(json!({
            "email": "jane@example.com",
            "password": "longenough",
            "first_name": "Jane",
            "last_name": "Doe",
        }))
        .to_request();
    let response: Value = test::call_and_read_body_json(&app, request).await;
    assert_eq!(response["success"], true);
    assert_eq!(response["data"]["username"], "jane");

    // Verify via the emailed link token
    let mail = email.last_to("jane@example.com").unwrap();
    let token = extract_token(&mail.body);

    let request = test::TestRequest::get()
        .uri(&format!("/api/v1/auth/verify-email/{}", token))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), 200);

    // Reusing the link fails
    let request = test::TestRequest::get()
        .uri(&format!("/api/v1/auth/verify-email/{}", token))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), 404);

    // Log in
    let request = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({
            "email": "jane@example.com",
            "password": "longenough",
        }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), 200);

    // Wrong password is a 401
    let request = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({
            "email": "jane@example.com",
            "password": "wrong-password",
        }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), 401);
}

#[actix_rt::test]
async fn signup_rejects_invalid_payload() {
    let (state, _email) = test_state();
    let app = test_app!(state);

    let request = test::TestRequest::post()
        .uri("/api/v1/auth/signup")
        .set_json(json!({
            "email": "not-an-email",
            "password": "longenough",
        }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), 400);
}

#[actix_rt::test]
async fn password_reset_request_does_not_reveal_accounts() {
    let (state, _email) = test_state();
    let app = test_app!(state);

    // One real account
    let request = test::TestRequest::post()
        .uri("/api/v1/auth/signup")
        .set_json(json!({
            "email": "jane@example.com",
            "password": "longenough",
        }))
        .to_request();
    test::call_service(&app, request).await;

    let known = test::TestRequest::post()
        .uri("/api/v1/auth/password-reset")
        .set_json(json!({ "email": "jane@example.com" }))
        .to_request();
    let known_body: Value = test::call_and_read_body_json(&app, known).await;

    let unknown = test::TestRequest::post()
        .uri("/api/v1/auth/password-reset")
        .set_json(json!({ "email": "nobody@example.com" }))
        .to_request();
    let unknown_body: Value = test::call_and_read_body_json(&app, unknown).await;

    // Identical message either way
    assert_eq!(known_body["success"], unknown_body["success"]);
    assert_eq!(known_body["data"]["message"], unknown_body["data"]["message"]);
}

#[actix_rt::test]
async fn password_reset_confirm_flow() {
    let (state, email) = test_state();
    let app = test_app!(state);

    let request = test::TestRequest::post()
        .uri("/api/v1/auth/signup")
        .set_json(json!({
            "email": "jane@example.com",
            "password": "longenough",
        }))
        .to_request();
    test::call_service(&app, request).await;

    let request = test::TestRequest::post()
        .uri("/api/v1/auth/password-reset")
        .set_json(json!({ "email": "jane@example.com" }))
        .to_request();
    test::call_service(&app, request).await;

    // Pull the token out of the reset email
    let mail = email.last_to("jane@example.com").unwrap();
    let line = mail
        .body
        .lines()
        .find(|l| l.contains("/password-reset/"))
        .unwrap();
    let token = line
        .trim()
        .rsplit("/password-reset/")
        .next()
        .unwrap()
        .trim_end_matches('/');

    let request = test::TestRequest::post()
        .uri("/api/v1/auth/password-reset/confirm")
        .set_json(json!({ "token": token, "password": "brand-new-pass" }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), 200);

    // New password works
    let request = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(json!({
            "email": "jane@example.com",
            "password": "brand-new-pass",
        }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), 200);

    // Token is single use
    let request = test::TestRequest::post()
        .uri("/api/v1/auth/password-reset/confirm")
        .set_json(json!({ "token": token, "password": "another-pass-1" }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), 404);
}
