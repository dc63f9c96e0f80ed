use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use seniorsafe_api::ApiConfig;
use seniorsafe_tests::{get, post_json, read_json, test_app, test_app_with, TEST_API_KEY};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn health_is_public() {
    let app = test_app();

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get("x-request-id").is_some());
    assert_eq!(
        response.headers().get("x-content-type-options").unwrap(),
        "nosniff"
    );

    let body = read_json(response).await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["metrics"]["requests_total"], 0);
}

#[tokio::test]
async fn starters_are_public() {
    let response = test_app()
        .oneshot(Request::builder().uri("/v1/starters").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await.unwrap();
    assert_eq!(body.as_array().map(Vec::len), Some(6));
    assert_eq!(body[0]["label"], "Identity Stolen");
}

#[tokio::test]
async fn emergency_check_requires_api_key() {
    let request = Request::builder()
        .method("POST")
        .uri("/v1/emergency/check")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "text": "gift cards" }).to_string()))
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = read_json(response).await.unwrap();
    assert_eq!(body["error"], "unauthorized");
}

#[tokio::test]
async fn emergency_check_returns_guidance() {
    let response = test_app()
        .oneshot(post_json(
            "/v1/emergency/check",
            json!({ "text": "I'm about to buy $500 in gift cards like they asked" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await.unwrap();
    assert_eq!(body["is_emergency"], true);
    assert_eq!(body["tier"], "critical");
    assert_eq!(body["scenario"], "payment_in_progress");
    assert!(body["guidance"]
        .as_str()
        .unwrap()
        .starts_with("# 🚨 STOP: Do NOT Make This Payment"));
}

#[tokio::test]
async fn low_urgency_is_not_an_emergency() {
    let response = test_app()
        .oneshot(post_json(
            "/v1/emergency/check",
            json!({ "text": "How do I make a strong password?" }),
        ))
        .await
        .unwrap();

    let body = read_json(response).await.unwrap();
    assert_eq!(body["is_emergency"], false);
    assert_eq!(body["tier"], "low");
    assert!(body["scenario"].is_null());
    assert!(body["guidance"].is_null());
}

#[tokio::test]
async fn resources_lookup_by_zip() {
    let response = test_app()
        .oneshot(get("/v1/resources?zip=10001-1234"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await.unwrap();
    assert_eq!(body["zip"], "10001");
    assert_eq!(body["state"], "NY");

    let resources = body["resources"].as_array().unwrap();
    assert_eq!(resources.len(), 8);
    assert_eq!(resources[0]["category"], "state_consumer_protection");
    assert_eq!(resources[7]["category"], "local_law_enforcement");
    assert!(body["formatted"]
        .as_str()
        .unwrap()
        .starts_with("## Local Resources for ZIP Code 10001-1234 (NY)"));
}

#[tokio::test]
async fn resources_distinguish_invalid_and_unknown_zip() {
    let app = test_app();

    let invalid = app
        .clone()
        .oneshot(get("/v1/resources?zip=ABCDE"))
        .await
        .unwrap();
    assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);
    assert_eq!(read_json(invalid).await.unwrap()["error"], "invalid_zip");

    let unknown = app.oneshot(get("/v1/resources?zip=00100")).await.unwrap();
    assert_eq!(unknown.status(), StatusCode::NOT_FOUND);
    assert_eq!(read_json(unknown).await.unwrap()["error"], "unknown_region");
}

#[tokio::test]
async fn chat_routes_zip_and_emergencies() {
    let app = test_app();

    let zip_reply = app
        .clone()
        .oneshot(post_json("/v1/chat", json!({ "text": "my zip is 60601" })))
        .await
        .unwrap();
    assert_eq!(zip_reply.status(), StatusCode::OK);
    let body = read_json(zip_reply).await.unwrap();
    assert_eq!(body["kind"], "local_resources");
    assert_eq!(body["state"], "IL");

    let emergency = app
        .oneshot(post_json(
            "/v1/chat",
            json!({ "text": "They're threatening to arrest me if I don't pay" }),
        ))
        .await
        .unwrap();
    let body = read_json(emergency).await.unwrap();
    assert_eq!(body["kind"], "emergency");
    assert_eq!(body["scenario"], "personal_threat");
}

#[tokio::test]
async fn oversized_message_is_rejected() {
    let response = test_app()
        .oneshot(post_json(
            "/v1/chat",
            json!({ "text": "a".repeat(4_001) }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn rate_limit_applies_per_client() {
    let app = test_app_with(ApiConfig {
        api_key: TEST_API_KEY.to_string(),
        rate_limit_window: Duration::from_secs(60),
        rate_limit_max: 2,
        ..ApiConfig::default()
    });

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(get("/v1/resources?zip=90210"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let limited = app.oneshot(get("/v1/resources?zip=90210")).await.unwrap();
    assert_eq!(limited.status(), StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn rotating_forwarded_for_does_not_reset_budget() {
    let app = test_app_with(ApiConfig {
        api_key: TEST_API_KEY.to_string(),
        rate_limit_window: Duration::from_secs(60),
        rate_limit_max: 1,
        ..ApiConfig::default()
    });

    let mut statuses = Vec::new();
    for hop in 0..5 {
        let request = Request::builder()
            .uri("/v1/resources?zip=90210")
            .header("x-api-key", TEST_API_KEY)
            .header("x-forwarded-for", format!("10.0.0.{hop}"))
            .body(Body::empty())
            .unwrap();
        statuses.push(app.clone().oneshot(request).await.unwrap().status());
    }

    assert_eq!(statuses[0], StatusCode::OK);
    assert!(statuses[1..]
        .iter()
        .all(|status| *status == StatusCode::TOO_MANY_REQUESTS));
}

#[tokio::test]
async fn trusted_forwarded_for_keys_the_budget_per_client() {
    let app = test_app_with(ApiConfig {
        api_key: TEST_API_KEY.to_string(),
        rate_limit_window: Duration::from_secs(60),
        rate_limit_max: 1,
        trust_forwarded_for: true,
        ..ApiConfig::default()
    });

    let from = |client: &str| {
        Request::builder()
            .uri("/v1/resources?zip=90210")
            .header("x-api-key", TEST_API_KEY)
            .header("x-forwarded-for", client)
            .body(Body::empty())
            .unwrap()
    };

    let first = app.clone().oneshot(from("203.0.113.1")).await.unwrap();
    assert_eq!(first.status(), StatusCode::OK);
    let repeat = app.clone().oneshot(from("203.0.113.1")).await.unwrap();
    assert_eq!(repeat.status(), StatusCode::TOO_MANY_REQUESTS);
    let other = app.oneshot(from("203.0.113.2")).await.unwrap();
    assert_eq!(other.status(), StatusCode::OK);
}
