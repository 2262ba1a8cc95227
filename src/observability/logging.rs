//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber for a fixture binary
//! - Derive the default filter from the configured log level
//!
//! # Design Decisions
//! - RUST_LOG wins over the config file when set
//! - tower_http spans follow the crate's own level

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// `level` is the configured log level for the crate's own targets;
/// the `RUST_LOG` environment variable overrides it entirely.
pub fn init(level: &str) {
    let default_filter = format!("reticulum_fixtures={level},tower_http={level}");

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&default_filter)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
