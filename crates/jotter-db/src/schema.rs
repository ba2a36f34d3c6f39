//! Idempotent schema bootstrap.

use sqlx::SqlitePool;
use tracing::info;

use jotter_core::{Error, Result};

/// The notes table. Timestamps are ISO-8601 UTC text.
const CREATE_NOTES_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS notes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    content TEXT NOT NULL DEFAULT '',
    tags TEXT NOT NULL DEFAULT '',
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
)";

/// Index backing the listing's `updated_at` descending sort.
const CREATE_UPDATED_AT_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_notes_updated_at ON notes (updated_at DESC)";

/// Create the notes table and its listing index if absent. Safe to
/// run on every startup.
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(CREATE_NOTES_TABLE)
        .execute(pool)
        .await
        .map_err(Error::Database)?;
    sqlx::query(CREATE_UPDATED_AT_INDEX)
        .execute(pool)
        .await
        .map_err(Error::Database)?;

    info!(
        subsystem = "db",
        component = "schema",
        op = "init",
        db_table = "notes",
        "Schema ready"
    );
    Ok(())
}
