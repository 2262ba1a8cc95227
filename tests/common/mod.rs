//! Shared utilities for integration testing the fixture services.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tokio::sync::mpsc;

use reticulum_fixtures::config::FixtureConfig;
use reticulum_fixtures::{gateway, payments};

/// HTTP client that ignores any ambient proxy configuration.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// Spawn the api-gateway fixture on an ephemeral loopback port.
#[allow(dead_code)]
pub async fn spawn_gateway() -> SocketAddr {
    let config = FixtureConfig::default();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let app = gateway::router(&config);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

/// Spawn the payment-api fixture on an ephemeral loopback port.
///
/// Returns the bound address and the receiving end of the task channel so
/// tests can observe what `/tasks` forwards to the worker.
#[allow(dead_code)]
pub async fn spawn_payments() -> (SocketAddr, mpsc::Receiver<String>) {
    let config = FixtureConfig::default();
    let pool = payments::db::connect(&config.payments.database_url)
        .await
        .unwrap();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let (task_tx, task_rx) = mpsc::channel(16);
    let app = payments::router(&config, pool, task_tx);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (addr, task_rx)
}
