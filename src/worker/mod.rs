//! Internal worker fixture.
//!
//! # Data Flow
//! ```text
//! POST /tasks (payment-api)
//!     → mpsc channel
//!     → run() task loop
//!     → run_command() → sh -c <task input>
//! ```
//!
//! # Design Decisions
//! - run_command is the fixture: task input reaches a shell unmodified
//!   (command injection, high severity)
//! - The password below is committed and logged on purpose
//! - The loop exits on shutdown broadcast or when the channel closes

use tokio::process::Command;
use tokio::sync::{broadcast, mpsc};

/// Hardcoded credential fixture.
///
/// Rule: generic.secrets.gitleaks.hardcoded-secret
pub const DB_PASSWORD: &str = "super-secret-password-123";

/// Run a task command through the shell.
///
/// Command injection: the task string is passed to `sh -c` unmodified.
/// Rule: rust.lang.security.shell-injection.command-injection
pub async fn run_command(cmd: &str) -> std::io::Result<std::process::ExitStatus> {
    Command::new("sh").arg("-c").arg(cmd).status().await
}

/// Log the (hardcoded) task-store credentials at startup.
pub fn connect_db() {
    // Secret written to the log in the clear.
    tracing::info!(password = %DB_PASSWORD, "connecting to task store");
}

/// Drain the task channel until shutdown.
pub async fn run(mut tasks: mpsc::Receiver<String>, mut shutdown: broadcast::Receiver<()>) {
    connect_db();

    loop {
        tokio::select! {
            task = tasks.recv() => {
                let Some(cmd) = task else { break };
                tracing::info!(command = %cmd, "processing task");
                match run_command(&cmd).await {
                    Ok(status) => {
                        tracing::info!(code = ?status.code(), "task finished");
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "task failed to spawn");
                    }
                }
            }
            _ = shutdown.recv() => {
                tracing::info!("worker loop stopping");
                break;
            }
        }
    }
}
