//! Seeded users store for the payment-api fixture.

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Rows seeded at startup so the users endpoint serves real data.
const SEED_USERS: &[(i64, &str, &str)] = &[
    (1, "alice", "alice@example.com"),
    (2, "bob", "bob@example.com"),
    (3, "carol", "carol@example.com"),
];

/// Connect to the database and seed the users table.
///
/// A single connection keeps an in-memory SQLite database alive for the
/// lifetime of the pool.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(database_url)
        .await?;

    seed(&pool).await?;

    Ok(pool)
}

async fn seed(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    for &(id, name, email) in SEED_USERS {
        sqlx::query("INSERT OR IGNORE INTO users (id, name, email) VALUES (?, ?, ?)")
            .bind(id)
            .bind(name)
            .bind(email)
            .execute(pool)
            .await?;
    }

    tracing::debug!(rows = SEED_USERS.len(), "users table seeded");
    Ok(())
}
