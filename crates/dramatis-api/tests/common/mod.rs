//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::TimeZone;
use http_body_util::BodyExt;
use tower::ServiceExt;

use dramatis_api::routes;
use dramatis_api::state::AppState;
use dramatis_core::clock::Clock;
use dramatis_core::repository::SessionRepository;
use dramatis_engine::PlayerConfig;
use dramatis_test_support::{FixedClock, InMemorySessionRepository, sample_catalog};

/// Fixed timestamp used across all integration tests.
fn fixed_clock() -> Arc<dyn Clock> {
    Arc::new(FixedClock(
        chrono::Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap(),
    ))
}

/// Build the full app router over the fixture catalog and an in-memory
/// session store. Uses the same route structure as `main.rs`.
pub fn build_test_app() -> Router {
    build_test_app_with(Arc::new(InMemorySessionRepository::new()))
}

/// Build the full app router with a custom session repository for tests
/// that need to seed or fail the store.
pub fn build_test_app_with(sessions: Arc<dyn SessionRepository>) -> Router {
    let app_state = AppState::new(
        Arc::new(sample_catalog()),
        Arc::new(PlayerConfig::default()),
        fixed_clock(),
        sessions,
    );

    Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/viewer", routes::viewer::router())
        .with_state(app_state)
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}
