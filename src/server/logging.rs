//! Request observability wrapper
//!
//! Every request is logged on entry (method, uri, headers) and on
//! completion (status, elapsed wall-clock time), whatever the outcome.
//! The wrapper observes only: it never alters the response or swallows a
//! downstream error.

use axum::extract::Request;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use std::time::Instant;

/// Headers whose values never reach the log
const REDACTED_HEADERS: &[&str] = &["authorization", "cookie", "proxy-authorization"];

/// Middleware wrapping every operation with entry/completion logging
pub async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();

    tracing::info!(
        %method,
        %uri,
        headers = %render_headers(req.headers()),
        "request received"
    );

    let start = Instant::now();
    let response = next.run(req).await;
    let elapsed_ms = start.elapsed().as_millis();

    tracing::info!(
        %method,
        %uri,
        status = %response.status(),
        elapsed_ms,
        "request completed"
    );

    response
}

/// Render the header map for logging, redacting sensitive values
fn render_headers(headers: &HeaderMap) -> String {
    let rendered: Vec<String> = headers
        .iter()
        .map(|(name, value)| {
            if REDACTED_HEADERS.contains(&name.as_str()) {
                format!("{}=[redacted]", name)
            } else {
                format!("{}={}", name, value.to_str().unwrap_or("[binary]"))
            }
        })
        .collect();
    rendered.join(", ")
}
