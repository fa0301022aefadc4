//! HTTP-level tests for the password step of the login flow.
//!
//! Covers phone format validation, generic credential errors, the OTP
//! challenge response, and account lockout after repeated failures.

mod common;

use actix_web::{test, web, App};
use common::{test_state, ADMIN_PASSWORD, ADMIN_PHONE};
use serde_json::{json, Value};

#[actix_web::test]
async fn test_login_rejects_malformed_phone() {
    let (ctx, limiter) = test_state();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(ctx.clone()))
            .app_data(web::Data::new(limiter.clone()))
            .configure(|cfg| vermifarm_server::routes::configure(cfg, &ctx)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/v1/api/auth/login")
        .set_json(json!({ "phone": "12345", "password": ADMIN_PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_phone");
}

#[actix_web::test]
async fn test_login_wrong_password_returns_generic_error() {
    let (ctx, limiter) = test_state();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(ctx.clone()))
            .app_data(web::Data::new(limiter.clone()))
            .configure(|cfg| vermifarm_server::routes::configure(cfg, &ctx)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/v1/api/auth/login")
        .set_json(json!({ "phone": ADMIN_PHONE, "password": "nope" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_credentials");
    assert_eq!(body["message"], "Invalid phone or password");
}

#[actix_web::test]
async fn test_login_unknown_phone_matches_wrong_password_response() {
    let (ctx, limiter) = test_state();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(ctx.clone()))
            .app_data(web::Data::new(limiter.clone()))
            .configure(|cfg| vermifarm_server::routes::configure(cfg, &ctx)),
    )
    .await;

    // A valid-format phone with no account behind it
    let req = test::TestRequest::post()
        .uri("/v1/api/auth/login")
        .set_json(json!({ "phone": "0799999999", "password": "whatever" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "invalid_credentials");
    assert_eq!(body["message"], "Invalid phone or password");
}

#[actix_web::test]
async fn test_login_success_issues_otp_challenge() {
    let (ctx, limiter) = test_state();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(ctx.clone()))
            .app_data(web::Data::new(limiter.clone()))
            .configure(|cfg| vermifarm_server::routes::configure(cfg, &ctx)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/v1/api/auth/login")
        .set_json(json!({ "phone": ADMIN_PHONE, "password": ADMIN_PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "otp_required");
    assert!(body["temp_token"].as_str().unwrap().len() >= 32);
    assert_eq!(body["expires_in_seconds"], 300);

    // No session exists until the OTP step completes
    assert_eq!(ctx.sessions().active_count(), 0);
}

#[actix_web::test]
async fn test_third_failure_locks_account() {
    let (ctx, limiter) = test_state();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(ctx.clone()))
            .app_data(web::Data::new(limiter.clone()))
            .configure(|cfg| vermifarm_server::routes::configure(cfg, &ctx)),
    )
    .await;

    for attempt in 1..=3 {
        let req = test::TestRequest::post()
            .uri("/v1/api/auth/login")
            .set_json(json!({ "phone": ADMIN_PHONE, "password": "wrong" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let body: Value = test::read_body_json(resp).await;
        if attempt < 3 {
            assert_eq!(body["error"], "invalid_credentials");
        } else {
            // The locking attempt already reports the lockout
            assert_eq!(body["error"], "account_locked");
            assert!(body["retry_after_seconds"].as_u64().unwrap() > 0);
        }
    }

    // Correct password is still rejected while the lockout is active
    let req = test::TestRequest::post()
        .uri("/v1/api/auth/login")
        .set_json(json!({ "phone": ADMIN_PHONE, "password": ADMIN_PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "account_locked");
}

#[actix_web::test]
async fn test_healthz_is_open() {
    let (ctx, limiter) = test_state();
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(ctx.clone()))
            .app_data(web::Data::new(limiter.clone()))
            .configure(|cfg| vermifarm_server::routes::configure(cfg, &ctx)),
    )
    .await;

    let req = test::TestRequest::get().uri("/healthz").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["active_sessions"], 0);
}
