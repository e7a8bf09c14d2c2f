//! HTTP adapters - REST API implementations.
//!
//! [`build_router`] wraps the engine routes with request tracing, a request
//! timeout and CORS taken from the server configuration.

pub mod engine;

use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

pub use engine::{engine_routes, ApiError, EngineAppState};

/// Builds the application router with middleware.
pub fn build_router(state: EngineAppState, server: &ServerConfig) -> Router {
    engine_routes(state)
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_secs,
        )))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

/// Any origin when none are configured; otherwise only the listed ones.
///
/// Entries that are not valid header values are dropped, never widened to
/// any origin.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .expose_headers([header::CONTENT_DISPOSITION]);

    let configured = server.cors_origins_list();
    if configured.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = configured
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(origins)
}
