//! payment-api fixture binary.
//!
//! Serves the SQL-injection fixture (`/users?id=`), carries a hardcoded
//! credential, and feeds the command-injection worker loop from `/tasks`.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use reticulum_fixtures::config::{load_config, FixtureConfig};
use reticulum_fixtures::lifecycle::Shutdown;
use reticulum_fixtures::{lifecycle, observability, payments, worker};

#[derive(Parser)]
#[command(name = "payment-api")]
#[command(about = "SQL-injection fixture service", long_about = None)]
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

    // Credential in the startup log, exactly as the fixture requires.
    tracing::info!(
        bind_address = %config.payments.bind_address,
        api_key = %payments::API_KEY,
        "payment-api fixture starting"
    );

    let pool = payments::db::connect(&config.payments.database_url).await?;

    let shutdown = Shutdown::new();
    let (task_tx, task_rx) = mpsc::channel(64);
    let worker_handle = tokio::spawn(worker::run(task_rx, shutdown.subscribe()));

    let listener = TcpListener::bind(&config.payments.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let app = payments::router(&config, pool, task_tx);

    axum::serve(listener, app)
        .with_graceful_shutdown(lifecycle::shutdown_signal())
        .await?;

    // Drain the worker before exiting so an in-flight task can finish.
    shutdown.trigger();
    worker_handle.await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
