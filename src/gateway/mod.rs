//! api-gateway fixture service.
//!
//! # Data Flow
//! ```text
//! GET /debug/config → handlers.rs → internal settings as JSON (verbatim)
//! GET /api/data     → handlers.rs → static {"message": "proxied"} stub
//! ```
//!
//! # Design Decisions
//! - The debug endpoint is the fixture: internal configuration served to
//!   any unauthenticated caller (information disclosure, low severity)
//! - /api/data stands in for a proxied upstream; no real forwarding happens
//! - Standard middleware stack (timeout, request ID, trace) so the fixture
//!   looks like a service someone actually shipped

pub mod handlers;

use std::time::Duration;

use axum::{routing::get, Router};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::FixtureConfig;

/// Build the api-gateway router with its middleware stack.
pub fn router(config: &FixtureConfig) -> Router {
    Router::new()
        .route("/debug/config", get(handlers::debug_config))
        .route("/api/data", get(handlers::api_data))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.timeouts.request_secs,
        )))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
}
