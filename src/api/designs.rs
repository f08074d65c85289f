use axum::{
    Json, Router,
    body::Body,
    extract::State,
    middleware::from_fn_with_state,
    routing::post,
};

use crate::{
    AppState,
    api::types::{SaveDesignParams, SaveDesignResponse},
    error::{AppError, Result},
    middleware::origin::restrict_origin,
    services::design as design_service,
};

pub fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/designs", post(save_design))
        .route_layer(from_fn_with_state(state, restrict_origin))
}

async fn save_design(
    State(state): State<AppState>,
    body: Body,
) -> Result<Json<SaveDesignResponse>> {
    let max_body_bytes = state.config.server.max_body_bytes;

    let body_bytes = axum::body::to_bytes(body, max_body_bytes)
        .await
        .map_err(|e| {
            if e.to_string().contains("length limit") {
                AppError::PayloadTooLarge(format!(
                    "Request body too large (max {max_body_bytes} bytes)"
                ))
            } else {
                AppError::InvalidParams("Could not read request body".into())
            }
        })?;

    let params: SaveDesignParams = serde_json::from_slice(&body_bytes)
        .map_err(|_| AppError::InvalidParams("Malformed JSON body".into()))?;

    let code = design_service::save_design(
        &state,
        params.product_id.as_deref(),
        params.svg,
        params.state,
    )
    .await?;

    Ok(Json(SaveDesignResponse { code }))
}
