use axum::{Router, routing::get};

use crate::AppState;

/// Liveness probe with a constant response.
async fn healthz() -> &'static str {
    "ok"
}

pub fn router() -> Router<AppState> {
    Router::new().route("/healthz", get(healthz))
}
