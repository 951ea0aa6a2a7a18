// src/logging_middleware.rs
//! Per-request logging: one summary line per response, JSON bodies at debug level

use axum::{
    body::{to_bytes, Body},
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{debug, info, warn, Level};

pub async fn log_request_response(request: Request, next: Next) -> Result<Response, StatusCode> {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if status.is_server_error() {
        warn!(method = %method, uri = %uri, status = %status, elapsed_ms, "Request failed");
    } else {
        info!(method = %method, uri = %uri, status = %status, elapsed_ms, "Request completed");
    }

    if !tracing::enabled!(Level::DEBUG) {
        return Ok(response);
    }

    let (parts, body) = response.into_parts();
    let bytes = to_bytes(body, usize::MAX)
        .await
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    if !bytes.is_empty() {
        match serde_json::from_slice::<serde_json::Value>(&bytes) {
            Ok(json) => debug!(status = %parts.status, response_body = %json, "Response body"),
            Err(_) => debug!(
                status = %parts.status,
                response_body = %String::from_utf8_lossy(&bytes),
                "Response body"
            ),
        }
    }

    Ok(Response::from_parts(parts, Body::from(bytes)))
}
