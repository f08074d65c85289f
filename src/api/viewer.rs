use axum::{
    Router,
    extract::{Path, State},
    http::{StatusCode, header},
    middleware::from_fn_with_state,
    response::{Html, IntoResponse, Response},
    routing::get,
};

use crate::{
    AppState,
    error::AppError,
    middleware::basic_auth::require_basic_auth,
    services::design::{
        self as design_service,
        render::{download_file_name, render_viewer_page},
    },
};

pub fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/{code}", get(view_design))
        .route("/{code}/download", get(download_design))
        .route_layer(from_fn_with_state(state, require_basic_auth))
}

async fn view_design(State(state): State<AppState>, Path(code): Path<String>) -> Response {
    match design_service::fetch_design(&state, &code).await {
        Ok(design) => Html(render_viewer_page(&design)).into_response(),
        Err(err) => viewer_error(err),
    }
}

async fn download_design(State(state): State<AppState>, Path(code): Path<String>) -> Response {
    let design = match design_service::fetch_design(&state, &code).await {
        Ok(design) => design,
        Err(err) => return viewer_error(err),
    };

    let disposition = format!(r#"attachment; filename="{}""#, download_file_name(&design));

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "image/svg+xml; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        design.svg,
    )
        .into_response()
}

fn viewer_error(err: AppError) -> Response {
    match err {
        AppError::DesignNotFound => (StatusCode::NOT_FOUND, "Code not found").into_response(),
        other => other.into_response(),
    }
}
