//! Integration tests for broadcast, history and stats endpoints

mod common;

use std::sync::Arc;

use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};
use uuid::Uuid;

use sc_api::create_app;

use common::{
    auth_config, bearer, broken_store_state, cors_config, memory_state, token_for, ScriptedProvider,
};

#[actix_web::test]
async fn test_send_to_explicit_recipients() {
    let provider = Arc::new(ScriptedProvider::failing_for(&["+915551234"]));
    let app = test::init_service(create_app(memory_state(provider.clone()), &auth_config(), &cors_config())).await;
    let token = token_for(Uuid::new_v4(), Uuid::new_v4());

    let req = test::TestRequest::post()
        .uri("/api/v1/sms/send")
        .insert_header(bearer(&token))
        .set_json(json!({
            "message": "School closed tomorrow",
            "recipients": ["+11234567890", "5551234"]
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = test::read_body_json(resp).await;
    let data = &body["data"];
    assert_eq!(data["summary"], json!({ "total": 2, "succeeded": 1, "failed": 1 }));

    let results = data["results"].as_array().unwrap();
    assert_eq!(results[0]["recipient"], "+11234567890");
    assert_eq!(results[0]["status"], "sent");
    assert_eq!(results[0]["message_id"], "SM001");
    assert_eq!(results[1]["recipient"], "5551234");
    assert_eq!(results[1]["normalized"], "+915551234");
    assert_eq!(results[1]["status"], "failed");
    assert!(results[1]["error"].as_str().unwrap().contains("not a valid phone number"));

    assert_eq!(provider.sent(), vec!["+11234567890", "+915551234"]);
}

#[actix_web::test]
async fn test_invalid_broadcasts_never_reach_provider() {
    let provider = Arc::new(ScriptedProvider::default());
    let app = test::init_service(create_app(memory_state(provider.clone()), &auth_config(), &cors_config())).await;
    let token = token_for(Uuid::new_v4(), Uuid::new_v4());

    let payloads = vec![
        json!({ "message": "", "recipients": ["5551234"] }),
        json!({ "message": "   ", "recipients": ["5551234"] }),
        json!({ "message": "a".repeat(161), "recipients": ["5551234"] }),
        json!({ "message": "Hello", "recipients": [] }),
        // No recipients and no contacts
        json!({ "message": "Hello" }),
    ];

    for payload in payloads {
        let req = test::TestRequest::post()
            .uri("/api/v1/sms/send")
            .insert_header(bearer(&token))
            .set_json(payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    assert!(provider.sent().is_empty());

    let req = test::TestRequest::get()
        .uri("/api/v1/sms/messages")
        .insert_header(bearer(&token))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_send_without_recipients_targets_all_contacts() {
    let provider = Arc::new(ScriptedProvider::default());
    let app = test::init_service(create_app(memory_state(provider.clone()), &auth_config(), &cors_config())).await;
    let token = token_for(Uuid::new_v4(), Uuid::new_v4());

    for (name, phone) in [("Asha", "9876543210"), ("Ben", "+15550001")] {
        let req = test::TestRequest::post()
            .uri("/api/v1/contacts")
            .insert_header(bearer(&token))
            .set_json(json!({ "name": name, "phone": phone }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::post()
        .uri("/api/v1/sms/send")
        .insert_header(bearer(&token))
        .set_json(json!({ "message": "PTA meeting on Friday" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    assert_eq!(provider.sent(), vec!["+919876543210", "+15550001"]);
}

#[actix_web::test]
async fn test_history_and_stats_follow_broadcasts() {
    let provider = Arc::new(ScriptedProvider::default());
    let app = test::init_service(create_app(memory_state(provider), &auth_config(), &cors_config())).await;
    let staff = Uuid::new_v4();
    let token = token_for(staff, Uuid::new_v4());
    let other_school = token_for(Uuid::new_v4(), Uuid::new_v4());

    let req = test::TestRequest::get()
        .uri("/api/v1/stats")
        .insert_header(bearer(&token))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["total_messages"], 0);
    assert_eq!(body["data"]["last_message_time"], Value::Null);

    let mut ids = Vec::new();
    for text in ["First notice", "Second notice"] {
        let req = test::TestRequest::post()
            .uri("/api/v1/sms/send")
            .insert_header(bearer(&token))
            .set_json(json!({ "message": text, "recipients": ["5551234"] }))
            .to_request();
        let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
        ids.push(body["data"]["message_id"].as_str().unwrap().to_string());
    }

    let req = test::TestRequest::get()
        .uri("/api/v1/sms/messages")
        .insert_header(bearer(&token))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let messages = body["data"].as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["text"], "Second notice");
    assert_eq!(messages[0]["sent_by"], staff.to_string());

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/sms/messages/{}", ids[0]))
        .insert_header(bearer(&token))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["text"], "First notice");

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/sms/messages/{}", ids[0]))
        .insert_header(bearer(&other_school))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri("/api/v1/stats")
        .insert_header(bearer(&token))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["total_messages"], 2);
    assert_eq!(body["data"]["total_contacts"], 0);
    assert!(body["data"]["last_message_time"].is_string());
}

#[actix_web::test]
async fn test_unrecorded_broadcast_reports_results() {
    let provider = Arc::new(ScriptedProvider::default());
    let app = test::init_service(create_app(broken_store_state(provider.clone()), &auth_config(), &cors_config())).await;
    let token = token_for(Uuid::new_v4(), Uuid::new_v4());

    let req = test::TestRequest::post()
        .uri("/api/v1/sms/send")
        .insert_header(bearer(&token))
        .set_json(json!({ "message": "Hello", "recipients": ["5551234", "+15550001"] }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "BROADCAST_NOT_RECORDED");
    assert_eq!(body["details"]["summary"]["succeeded"], 2);
    assert_eq!(body["details"]["results"].as_array().unwrap().len(), 2);

    // Sends already happened
    assert_eq!(provider.sent().len(), 2);
}
