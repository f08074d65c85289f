#![allow(dead_code)]

use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use base64::Engine;
use design_vault::{
    AppState, build_router,
    config::{
        ANY_ORIGIN, CacheConfig, Config, DatabaseConfig, DesignsConfig, ServerConfig,
        ViewerConfig,
    },
    infrastructure::db::{Database, repositories::DesignRepository},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASS: &str = "s3cret";
pub const SHOP_ORIGIN: &str = "https://shop.example.com";
pub const MAX_BODY_BYTES: usize = 64 * 1024;
pub const MAX_SVG_BYTES: usize = 32 * 1024;

pub const SAMPLE_SVG: &str =
    r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"><rect width="10" height="10" fill="red"/></svg>"#;

/// Test configuration backed by a private in-memory SQLite database.
///
/// A single pooled connection keeps the in-memory database alive for the
/// lifetime of the pool.
pub fn test_config(allowed_origin: &str) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
            allowed_origin: allowed_origin.into(),
            max_concurrent_requests: 16,
            max_body_bytes: MAX_BODY_BYTES,
        },
        database: DatabaseConfig {
            url: "sqlite::memory:".into(),
            max_connections: 1,
            min_connections: 1,
            connect_timeout: Duration::from_secs(5),
            idle_timeout: Duration::from_secs(3600),
        },
        cache: CacheConfig {
            designs_max_bytes: 4 * 1024 * 1024,
            designs_ttl: Duration::from_secs(60),
        },
        viewer: ViewerConfig {
            username: ADMIN_USER.into(),
            password: ADMIN_PASS.into(),
        },
        designs: DesignsConfig {
            code_length: 6,
            max_code_attempts: 5,
            max_svg_bytes: MAX_SVG_BYTES,
        },
    }
}

pub async fn test_state_with_origin(allowed_origin: &str) -> AppState {
    let config = test_config(allowed_origin);
    config.validate().unwrap();

    let db = Database::init_db(&config.database).await.unwrap();
    db.run_migrations().await.unwrap();

    AppState::new(config, db)
}

pub async fn test_state() -> AppState {
    test_state_with_origin(ANY_ORIGIN).await
}

pub fn build_test_app(state: AppState) -> Router {
    build_router(state)
}

pub async fn design_count(state: &AppState) -> u64 {
    DesignRepository::count_designs(state.db.get_connection())
        .await
        .unwrap()
}

pub fn basic_auth(user: &str, pass: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(format!("{user}:{pass}"));
    format!("Basic {encoded}")
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: impl Into<Body>) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap();
    send(app, request).await
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn get_authed(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, basic_auth(ADMIN_USER, ADMIN_PASS))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Saves a design through the HTTP API and returns its code.
pub async fn save_design(app: Router, product_id: &str, svg: &str) -> String {
    let body = serde_json::json!({ "productId": product_id, "svg": svg }).to_string();
    let response = post_json(app, "/api/designs", body).await;
    assert_eq!(response.status(), 200);

    body_json(response).await["code"]
        .as_str()
        .unwrap()
        .to_string()
}
