// src/app.rs
//! Router composition shared by `main` and the router tests

use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    middleware, Extension, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::warn;

use crate::auth::resolve_session;
use crate::common::SharedState;
use crate::logging_middleware::log_request_response;
use crate::users::users_routes;

pub fn build_router(shared: SharedState, cors_origins: &[String]) -> Router {
    let origins: Vec<HeaderValue> = cors_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    Router::new()
        .merge(users_routes())
        // Layers run bottom-up: the state extension must wrap the session resolver
        .layer(middleware::from_fn(resolve_session))
        .layer(middleware::from_fn(log_request_response))
        .layer(Extension(shared))
        .layer(
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([Method::GET, Method::DELETE, Method::OPTIONS])
                .allow_headers([
                    header::CONTENT_TYPE,
                    header::AUTHORIZATION,
                    HeaderName::from_static("x-request-id"),
                ])
                .allow_credentials(true),
        )
        .layer(TraceLayer::new_for_http())
}
