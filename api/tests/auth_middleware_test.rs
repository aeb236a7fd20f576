//! Integration tests for JWT authentication on the `/api/v1` scope

mod common;

use std::sync::Arc;

use actix_web::{http::StatusCode, test};
use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use sc_api::create_app;
use sc_core::domain::entities::claims::Claims;

use common::{auth_config, bearer, cors_config, memory_state, sign, token_for, ScriptedProvider};

#[actix_web::test]
async fn test_missing_token_is_rejected() {
    let app = test::init_service(create_app(
        memory_state(Arc::new(ScriptedProvider::default())),
        &auth_config(),
        &cors_config(),
    ))
    .await;

    let req = test::TestRequest::get().uri("/api/v1/contacts").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "UNAUTHORIZED");
}

#[actix_web::test]
async fn test_invalid_tokens_are_rejected() {
    let app = test::init_service(create_app(
        memory_state(Arc::new(ScriptedProvider::default())),
        &auth_config(),
        &cors_config(),
    ))
    .await;

    let now = Utc::now().timestamp();
    let user = Uuid::new_v4();
    let school = Uuid::new_v4();
    let tokens = vec![
        "invalid-token".to_string(),
        sign(&Claims::new(user, school, now, now + 3600), "another-secret"),
        sign(&Claims::new(user, school, now - 7200, now - 3600), common::TEST_SECRET),
    ];

    for token in tokens {
        let req = test::TestRequest::get()
            .uri("/api/v1/stats")
            .insert_header(bearer(&token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}

#[actix_web::test]
async fn test_valid_token_reaches_handler() {
    let app = test::init_service(create_app(
        memory_state(Arc::new(ScriptedProvider::default())),
        &auth_config(),
        &cors_config(),
    ))
    .await;

    let token = token_for(Uuid::new_v4(), Uuid::new_v4());
    let req = test::TestRequest::get()
        .uri("/api/v1/stats")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_health_and_not_found_need_no_token() {
    let app = test::init_service(create_app(
        memory_state(Arc::new(ScriptedProvider::default())),
        &auth_config(),
        &cors_config(),
    ))
    .await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert!(body["services"]["store:memory"].is_object());

    let resp = test::call_service(&app, test::TestRequest::get().uri("/nowhere").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
