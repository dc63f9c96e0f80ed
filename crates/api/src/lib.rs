mod rate_limit;

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::extract::{ConnectInfo, Json, Query, State};
use axum::http::{header, HeaderName, HeaderValue, Method, Request, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{body::Body, Router};
use seniorsafe_agents::{SafetyDesk, STARTERS};
use seniorsafe_core::{format_resources, ContactRecord, LookupError, StateCode};
use seniorsafe_observability::{AppMetrics, MetricsSnapshot};
use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

pub use crate::rate_limit::ClientRateLimiter;

const MAX_MESSAGE_LEN: usize = 4_000;
const MAX_BODY_BYTES: usize = 16 * 1024;
const DEFAULT_API_KEY: &str = "dev-seniorsafe-key";

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub bind: String,
    pub api_key: String,
    pub rate_limit_window: Duration,
    pub rate_limit_max: usize,
    pub allowed_origins: Vec<String>,
    pub trust_forwarded_for: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8080".to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            rate_limit_window: Duration::from_secs(60),
            rate_limit_max: 120,
            allowed_origins: Vec::new(),
            trust_forwarded_for: false,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            bind: env::var("SENIORSAFE_BIND").unwrap_or(defaults.bind),
            api_key: env::var("SENIORSAFE_API_KEY")
                .ok()
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or(defaults.api_key),
            rate_limit_window: env::var("SENIORSAFE_RATE_LIMIT_WINDOW_SECONDS")
                .ok()
                .and_then(|value| value.parse::<u64>().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.rate_limit_window),
            rate_limit_max: env::var("SENIORSAFE_RATE_LIMIT_MAX")
                .ok()
                .and_then(|value| value.parse::<usize>().ok())
                .unwrap_or(defaults.rate_limit_max),
            allowed_origins: env::var("SENIORSAFE_ALLOWED_ORIGINS")
                .map(|value| parse_origins(&value))
                .unwrap_or_default(),
            trust_forwarded_for: env::var("SENIORSAFE_TRUST_FORWARDED_FOR")
                .map(|value| parse_flag(&value))
                .unwrap_or(defaults.trust_forwarded_for),
        }
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|origin| origin.trim().trim_end_matches('/').to_string())
        .filter(|origin| !origin.is_empty())
        .collect()
}

#[derive(Clone)]
pub struct ApiState {
    pub desk: Arc<SafetyDesk>,
    pub metrics: Arc<AppMetrics>,
    pub api_key: Arc<str>,
    pub limiter: ClientRateLimiter,
    pub trust_forwarded_for: bool,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp_utc: String,
    metrics: MetricsSnapshot,
}

#[derive(Debug, Deserialize)]
struct MessageRequest {
    text: String,
}

#[derive(Debug, Deserialize)]
struct ResourcesQuery {
    zip: String,
}

#[derive(Debug, Serialize)]
struct ResourcesResponse {
    zip: String,
    state: StateCode,
    resources: Vec<ContactRecord>,
    formatted: String,
}

pub fn build_app(config: ApiConfig) -> Result<Router> {
    let metrics = AppMetrics::shared();
    let desk = Arc::new(SafetyDesk::new(metrics.clone()));

    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .with_context(|| format!("invalid allowed origin {origin:?}"))
        })
        .collect::<Result<Vec<_>>>()?;

    let state = ApiState {
        desk,
        metrics,
        api_key: Arc::from(config.api_key.as_str()),
        limiter: ClientRateLimiter::new(config.rate_limit_window, config.rate_limit_max),
        trust_forwarded_for: config.trust_forwarded_for,
    };

    Ok(build_router(state, origins))
}

pub fn build_router(state: ApiState, allowed_origins: Vec<HeaderValue>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/v1/starters", get(starters))
        .route("/v1/emergency/check", post(emergency_check))
        .route("/v1/resources", get(resources))
        .route("/v1/chat", post(chat))
        .layer(build_cors_layer(allowed_origins))
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            api_key_middleware,
        ))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ))
        .with_state(state)
}

async fn health(State(state): State<ApiState>) -> impl IntoResponse {
    let payload = HealthResponse {
        status: "ok",
        timestamp_utc: chrono::Utc::now().to_rfc3339(),
        metrics: state.metrics.snapshot(),
    };
    (StatusCode::OK, Json(payload))
}

async fn starters() -> impl IntoResponse {
    (StatusCode::OK, Json(STARTERS))
}

async fn emergency_check(
    State(state): State<ApiState>,
    Json(request): Json<MessageRequest>,
) -> Response {
    if let Some(rejection) = reject_oversized(&request.text) {
        return rejection;
    }

    let check = state.desk.check_emergency(&request.text);
    (StatusCode::OK, Json(check)).into_response()
}

async fn resources(
    State(state): State<ApiState>,
    Query(query): Query<ResourcesQuery>,
) -> Response {
    match state.desk.local_resources(&query.zip) {
        Ok(jurisdiction) => {
            let formatted = format_resources(
                &jurisdiction.resources,
                jurisdiction.state.as_str(),
                query.zip.trim(),
            );
            (
                StatusCode::OK,
                Json(ResourcesResponse {
                    zip: jurisdiction.zip5,
                    state: jurisdiction.state,
                    resources: jurisdiction.resources,
                    formatted,
                }),
            )
                .into_response()
        }
        Err(error) => lookup_error_response(error),
    }
}

async fn chat(State(state): State<ApiState>, Json(request): Json<MessageRequest>) -> Response {
    if let Some(rejection) = reject_oversized(&request.text) {
        return rejection;
    }

    let reply = state.desk.handle_message(&request.text);
    (StatusCode::OK, Json(reply)).into_response()
}

fn reject_oversized(text: &str) -> Option<Response> {
    if text.chars().count() <= MAX_MESSAGE_LEN {
        return None;
    }

    Some(error_response(
        StatusCode::PAYLOAD_TOO_LARGE,
        "message_too_long",
        &format!("messages are limited to {MAX_MESSAGE_LEN} characters"),
    ))
}

fn lookup_error_response(error: LookupError) -> Response {
    let (status, code) = match error {
        LookupError::InvalidZip => (StatusCode::BAD_REQUEST, "invalid_zip"),
        LookupError::UnknownRegion(_) => (StatusCode::NOT_FOUND, "unknown_region"),
    };
    error_response(status, code, &error.to_string())
}

fn error_response(status: StatusCode, code: &str, message: &str) -> Response {
    (
        status,
        Json(serde_json::json!({
            "error": code,
            "message": message,
        })),
    )
        .into_response()
}

fn is_public_endpoint(path: &str) -> bool {
    matches!(path, "/health" | "/v1/starters")
}

async fn api_key_middleware(
    State(state): State<ApiState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let path = request.uri().path();
    if request.method() == Method::OPTIONS || is_public_endpoint(path) {
        return next.run(request).await;
    }

    let header_key = request
        .headers()
        .get("x-api-key")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    if header_key != &*state.api_key {
        return error_response(
            StatusCode::UNAUTHORIZED,
            "unauthorized",
            "missing or invalid x-api-key",
        );
    }

    next.run(request).await
}

async fn rate_limit_middleware(
    State(state): State<ApiState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if request.method() == Method::OPTIONS || is_public_endpoint(request.uri().path()) {
        return next.run(request).await;
    }

    let ip = request_ip(&request, state.trust_forwarded_for);
    if !state.limiter.allow(&ip) {
        tracing::warn!(client = %ip, "rate limit exceeded");
        return error_response(
            StatusCode::TOO_MANY_REQUESTS,
            "rate_limited",
            "rate limit exceeded for this IP",
        );
    }

    next.run(request).await
}

// x-forwarded-for is client-controlled unless a proxy in front rewrites it.
fn request_ip(request: &Request<Body>, trust_forwarded_for: bool) -> String {
    if trust_forwarded_for {
        let forwarded = request
            .headers()
            .get("x-forwarded-for")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.split(',').next())
            .map(str::trim)
            .filter(|value| !value.is_empty());
        if let Some(forwarded) = forwarded {
            return forwarded.to_string();
        }
    }

    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "local".to_string())
}

async fn security_headers_middleware(request: Request<Body>, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-store"),
    );
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static("default-src 'none'; frame-ancestors 'none'; base-uri 'none'"),
    );

    response
}

fn build_cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static("x-api-key")])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origins_are_trimmed_and_blanks_dropped() {
        assert_eq!(
            parse_origins(" https://seniorsafe.app/ ,, http://localhost:3000"),
            vec!["https://seniorsafe.app", "http://localhost:3000"]
        );
        assert!(parse_origins("").is_empty());
    }

    fn forwarded_request(peer: Option<SocketAddr>) -> Request<Body> {
        let mut request = Request::builder()
            .header("x-forwarded-for", "203.0.113.9, 10.0.0.1")
            .body(Body::empty())
            .unwrap();
        if let Some(peer) = peer {
            request.extensions_mut().insert(ConnectInfo(peer));
        }
        request
    }

    #[test]
    fn client_ip_comes_from_peer_address_by_default() {
        let peer: SocketAddr = "198.51.100.7:52100".parse().unwrap();
        assert_eq!(
            request_ip(&forwarded_request(Some(peer)), false),
            "198.51.100.7"
        );
        assert_eq!(request_ip(&forwarded_request(None), false), "local");
    }

    #[test]
    fn forwarded_ip_uses_first_hop_when_trusted() {
        let peer: SocketAddr = "198.51.100.7:52100".parse().unwrap();
        assert_eq!(
            request_ip(&forwarded_request(Some(peer)), true),
            "203.0.113.9"
        );

        let mut request = Request::builder().body(Body::empty()).unwrap();
        request.extensions_mut().insert(ConnectInfo(peer));
        assert_eq!(request_ip(&request, true), "198.51.100.7");
    }

    #[test]
    fn trust_flag_parsing() {
        assert!(parse_flag("true"));
        assert!(parse_flag(" 1 "));
        assert!(parse_flag("YES"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn lookup_errors_map_to_statuses() {
        assert_eq!(
            lookup_error_response(LookupError::InvalidZip).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            lookup_error_response(LookupError::UnknownRegion(100)).status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn oversized_messages_are_rejected() {
        assert!(reject_oversized("short").is_none());
        let long = "a".repeat(MAX_MESSAGE_LEN + 1);
        assert_eq!(
            reject_oversized(&long).map(|response| response.status()),
            Some(StatusCode::PAYLOAD_TOO_LARGE)
        );
    }
}
