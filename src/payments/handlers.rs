//! Request handlers for the payment-api fixture.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::payments::AppState;

/// Query parameters for the users endpoint.
#[derive(Debug, Deserialize)]
pub struct UsersQuery {
    pub id: Option<String>,
}

/// A row from the users table.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct UserRow {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// `GET /users?id=<value>`
///
/// SQL injection: request input concatenated directly into the query
/// text instead of bound as a parameter.
/// Rule: rust.lang.security.sqli.string-concat
pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<UsersQuery>,
) -> Json<Vec<UserRow>> {
    let id = params.id.unwrap_or_default();

    let query = format!("SELECT id, name, email FROM users WHERE id = {}", id);

    let rows = match sqlx::query_as::<_, UserRow>(&query).fetch_all(&state.pool).await {
        Ok(rows) => rows,
        Err(e) => {
            // Fatal abort on database error: the process dies instead of
            // reporting a failure to the caller.
            tracing::error!(error = %e, query = %query, "users query failed");
            std::process::exit(1);
        }
    };

    Json(rows)
}

/// Task submission body.
#[derive(Debug, Deserialize)]
pub struct TaskRequest {
    pub command: String,
}

/// `POST /tasks`
///
/// Accepts a shell command and hands it to the worker loop unmodified.
/// The injection itself lives in [`crate::worker::run_command`].
pub async fn enqueue_task(
    State(state): State<AppState>,
    Json(task): Json<TaskRequest>,
) -> (StatusCode, Json<serde_json::Value>) {
    if let Err(e) = state.tasks.send(task.command).await {
        tracing::warn!(error = %e, "worker channel closed, task dropped");
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({ "status": "worker unavailable" })),
        );
    }

    (
        StatusCode::ACCEPTED,
        Json(serde_json::json!({ "status": "queued" })),
    )
}
