//! Integration tests for the liveness probe.

mod common;

use axum::http::StatusCode;
use common::{body_string, build_test_app, get, test_state};

#[tokio::test]
async fn healthz_returns_ok_without_auth() {
    let app = build_test_app(test_state().await);

    let response = get(app, "/healthz").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "ok");
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = build_test_app(test_state().await);

    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
