//! Shared helpers for driving the HTTP router in integration tests.

use anyhow::{Context, Result};
use axum::body::{to_bytes, Body};
use axum::http::{Request, Response};
use axum::Router;
use seniorsafe_api::{build_app, ApiConfig};
use serde_json::Value;

pub const TEST_API_KEY: &str = "test-seniorsafe-key";

pub fn test_app() -> Router {
    test_app_with(ApiConfig {
        api_key: TEST_API_KEY.to_string(),
        ..ApiConfig::default()
    })
}

pub fn test_app_with(config: ApiConfig) -> Router {
    build_app(config).expect("app should build")
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("x-api-key", TEST_API_KEY)
        .body(Body::empty())
        .expect("valid request")
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("x-api-key", TEST_API_KEY)
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

pub async fn read_json(response: Response<Body>) -> Result<Value> {
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .context("failed to read response body")?;
    serde_json::from_slice(&body).context("response body is not JSON")
}
