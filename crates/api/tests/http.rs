//! Integration tests for the plain HTTP routes.

mod common;

use axum::http::{header, StatusCode};

use hostwatch_api::router::build_app_router;

// ---------------------------------------------------------------------------
// Test: GET / serves the live view page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn index_serves_live_view_page() {
    let (state, built) = common::test_state(vec![common::sample(10.0)]);
    let response = common::get(build_app_router(state), "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));

    let body = common::body_string(response).await;
    assert!(body.contains("new WebSocket("));
    assert!(body.contains("/ws"));

    // Serving the page does not start a sampling loop.
    assert_eq!(built.load(std::sync::atomic::Ordering::SeqCst), 0);
}

// ---------------------------------------------------------------------------
// Test: GET /health returns 200 with expected JSON fields
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_returns_ok_with_json() {
    let (state, _) = common::test_state(vec![common::sample(10.0)]);
    let response = common::get(build_app_router(state), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = common::body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let (state, _) = common::test_state(vec![common::sample(10.0)]);
    let response = common::get(build_app_router(state), "/metrics").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: /ws without upgrade headers is rejected
// ---------------------------------------------------------------------------

#[tokio::test]
async fn ws_route_requires_upgrade() {
    let (state, built) = common::test_state(vec![common::sample(10.0)]);
    let response = common::get(build_app_router(state), "/ws").await;

    assert!(response.status().is_client_error());
    assert_eq!(built.load(std::sync::atomic::Ordering::SeqCst), 0);
}
