//! Request handlers for the api-gateway fixture.

use axum::Json;
use serde::Serialize;

/// Internal deployment settings, serialized verbatim to any caller.
#[derive(Debug, Serialize)]
pub struct DebugConfig {
    pub db_host: &'static str,
    pub version: &'static str,
    pub env: &'static str,
}

/// `GET /debug/config`
///
/// Information disclosure: internal configuration returned on an
/// unauthenticated debug endpoint.
/// Rule: rust.lang.security.audit.exposed-debug-endpoint
pub async fn debug_config() -> Json<DebugConfig> {
    Json(DebugConfig {
        db_host: "db-service:5432",
        version: "1.0.0",
        env: "production",
    })
}

/// `GET /api/data`
///
/// Stands in for a proxy to the internal db-service.
pub async fn api_data() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "proxied" }))
}
