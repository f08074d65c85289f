use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use headers::{Authorization, HeaderMapExt, authorization::Basic};

use crate::{AppState, config::ViewerConfig, error::AppError};

/// Gate for the viewer routes. Runs before any lookup, so an unauthenticated
/// caller cannot tell whether a code exists.
pub async fn require_basic_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let credentials = request.headers().typed_get::<Authorization<Basic>>();

    match credentials {
        Some(Authorization(basic)) if credentials_match(&state.config.viewer, &basic) => {
            Ok(next.run(request).await)
        }
        Some(Authorization(basic)) => {
            tracing::warn!(
                username = %basic.username(),
                path = %request.uri().path(),
                "Viewer authentication failed"
            );
            Err(AppError::Unauthorized)
        }
        None => Err(AppError::Unauthorized),
    }
}

fn credentials_match(viewer: &ViewerConfig, basic: &Basic) -> bool {
    !viewer.username.is_empty()
        && !viewer.password.is_empty()
        && basic.username() == viewer.username
        && basic.password() == viewer.password
}
