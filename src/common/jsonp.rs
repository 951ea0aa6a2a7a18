// src/common/jsonp.rs
//! JSON responses that switch to JSONP when the request carries `?callback=`

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use super::error::MessageResponse;

/// Query parameters read by JSONP-capable routes
#[derive(Debug, Default, Deserialize)]
pub struct JsonpQuery {
    pub callback: Option<String>,
}

/// Plain JSON, or `callback(<json>)` as JavaScript when a usable callback name was given
#[derive(Debug)]
pub struct Jsonp<T> {
    callback: Option<String>,
    value: T,
}

impl<T> Jsonp<T> {
    pub fn new(callback: Option<&str>, value: T) -> Self {
        Self {
            callback: callback.and_then(sanitize_callback),
            value,
        }
    }
}

/// Keeps only identifier characters, dots and brackets; `None` if nothing is left
pub fn sanitize_callback(raw: &str) -> Option<String> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '$' | '.' | '[' | ']'))
        .collect();

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

impl<T> IntoResponse for Jsonp<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        let Some(callback) = self.callback else {
            return Json(self.value).into_response();
        };

        let body = match serde_json::to_string(&self.value) {
            Ok(body) => body,
            Err(e) => {
                error!(error = %e, "Failed to serialize JSONP body");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(MessageResponse::new("serialization failed")),
                )
                    .into_response();
            }
        };
        // U+2028/U+2029 are valid in JSON strings but end a line in JavaScript
        let body = body.replace('\u{2028}', "\\u2028").replace('\u{2029}', "\\u2029");

        (
            [
                (header::CONTENT_TYPE, "text/javascript; charset=utf-8"),
                (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
            ],
            format!(
                "/**/ typeof {cb} === 'function' && {cb}({body});",
                cb = callback,
                body = body
            ),
        )
            .into_response()
    }
}
