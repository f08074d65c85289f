use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::{AppState, error::AppError};

/// Rejects requests whose `Origin` is not the configured one.
///
/// With a wildcard origin every request passes, including ones without an
/// `Origin` header. Otherwise the header must be present and match exactly.
pub async fn restrict_origin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let server = &state.config.server;

    if !server.allows_any_origin() {
        let origin = request
            .headers()
            .get(header::ORIGIN)
            .and_then(|value| value.to_str().ok());

        if origin != Some(server.allowed_origin.as_str()) {
            tracing::warn!(origin = ?origin, "Rejected request from disallowed origin");
            return Err(AppError::OriginNotAllowed);
        }
    }

    Ok(next.run(request).await)
}
