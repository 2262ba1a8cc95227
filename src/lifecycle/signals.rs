//! OS signal handling.
//!
//! # Responsibilities
//! - Translate Ctrl+C into the graceful-shutdown path
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)

/// Wait for a shutdown signal (Ctrl+C).
pub async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
