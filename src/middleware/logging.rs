use axum::{extract::Request, http::header};
use tracing::{Span, info_span};

pub fn make_log_span(request: &Request) -> Span {
    let origin = request
        .headers()
        .get(header::ORIGIN)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-");

    info_span!(
        "request",
        method = ?request.method(),
        uri = %request.uri().path(),
        version = ?request.version(),
        origin = %origin,
    )
}
