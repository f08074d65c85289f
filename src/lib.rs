pub mod api;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod middleware;
pub mod services;
pub mod utils;

use std::sync::Arc;

use axum::{
    Router,
    http::{Method, header},
};
use tower::limit::ConcurrencyLimitLayer;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    config::Config,
    infrastructure::{cache::Cache, db::Database},
    services::design::CodeGenerator,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db: Arc<Database>,
    pub cache: Arc<Cache>,
    pub codes: Arc<CodeGenerator>,
}

impl AppState {
    pub fn new(config: Config, db: Database) -> Self {
        let cache = Cache::init(&config);
        let codes = CodeGenerator::new(config.designs.code_length);

        Self {
            config: Arc::new(config),
            db: Arc::new(db),
            cache: Arc::new(cache),
            codes: Arc::new(codes),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let server = &state.config.server;

    let allow_origin = if server.allows_any_origin() {
        AllowOrigin::mirror_request()
    } else {
        AllowOrigin::list(
            std::iter::once(&server.allowed_origin).filter_map(|origin| origin.parse().ok()),
        )
    };

    let cors = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true);

    Router::new()
        .merge(api::health::router())
        .nest("/api", api::designs::router(state.clone()))
        .nest("/d", api::viewer::router(state.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::logging::make_log_span)
                .on_request(())
                .on_eos(()),
        )
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(ConcurrencyLimitLayer::new(server.max_concurrent_requests))
        .with_state(state)
}
