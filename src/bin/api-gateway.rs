//! api-gateway fixture binary.
//!
//! Serves the information-disclosure fixture: an unauthenticated
//! `/debug/config` endpoint plus a stubbed `/api/data` route.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use reticulum_fixtures::config::{load_config, FixtureConfig};
use reticulum_fixtures::{gateway, lifecycle, observability};

#[derive(Parser)]
#[command(name = "api-gateway")]
#[command(about = "Information-disclosure fixture service", long_about = None)]
struct Cli {
    /// Path to a TOML config file (defaults apply when omitted).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match cli.config {
        Some(path) => load_config(&path)?,
        None => FixtureConfig::default(),
    };

    observability::logging::init(&config.observability.log_level);

    tracing::info!(
        bind_address = %config.gateway.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "api-gateway fixture starting"
    );

    let listener = TcpListener::bind(&config.gateway.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let app = gateway::router(&config);

    axum::serve(listener, app)
        .with_graceful_shutdown(lifecycle::shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
