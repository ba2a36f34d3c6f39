//! Test fixtures for repository tests.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::Database;

/// Open a fresh in-memory database with the schema applied.
///
/// A single connection keeps every query on the same in-memory store;
/// with more, each pool connection would see its own empty database.
pub async fn memory_database() -> Database {
    let options = SqliteConnectOptions::new()
        .in_memory(true)
        .foreign_keys(true)
        .pragma("case_sensitive_like", "ON");

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("connect to in-memory database");

    let db = Database::new(pool);
    db.init_schema().await.expect("schema init");
    db
}
