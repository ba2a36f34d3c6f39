//! # jotter-db
//!
//! SQLite database layer for jotter.
//!
//! This crate provides:
//! - Connection pool management
//! - Idempotent schema bootstrap for the `notes` table
//! - The note repository implementation
//!
//! ## Example
//!
//! ```rust,ignore
//! use jotter_db::{Database, NoteDraft, NoteRepository};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::connect("sqlite:notes.db").await?;
//!     db.init_schema().await?;
//!
//!     let note = db.notes.overwrite_first(NoteDraft {
//!         id: None,
//!         title: "Groceries".to_string(),
//!         content: "- eggs\n- coffee".to_string(),
//!         tags: "errands".to_string(),
//!     }).await?;
//!
//!     println!("Saved note: {}", note.id);
//!     Ok(())
//! }
//! ```

pub mod notes;
pub mod pool;
pub mod schema;

// Test fixtures for integration tests.
// Note: always compiled so integration tests (in tests/) can use the
// in-memory database helper.
pub mod test_fixtures;

// Re-export core types
pub use jotter_core::*;

// Re-export repository implementation
pub use notes::SqliteNoteRepository;
pub use pool::{create_pool, create_pool_with_config, PoolConfig};
pub use schema::init_schema;

/// Escape LIKE wildcard characters (`%`, `_`, `\`) in user input.
pub fn escape_like(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Combined database context with the connection pool and repository.
#[derive(Clone)]
pub struct Database {
    /// The underlying connection pool.
    pub pool: sqlx::SqlitePool,
    /// Note repository for persistence operations.
    pub notes: SqliteNoteRepository,
}

impl Database {
    /// Create a new Database instance from a connection pool.
    pub fn new(pool: sqlx::SqlitePool) -> Self {
        Self {
            notes: SqliteNoteRepository::new(pool.clone()),
            pool,
        }
    }

    /// Create a new Database instance by connecting to the given URL.
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = create_pool(url).await?;
        Ok(Self::new(pool))
    }

    /// Create with custom pool configuration.
    pub async fn connect_with_config(url: &str, config: PoolConfig) -> Result<Self> {
        let pool = create_pool_with_config(url, config).await?;
        Ok(Self::new(pool))
    }

    /// Run the idempotent schema bootstrap.
    pub async fn init_schema(&self) -> Result<()> {
        schema::init_schema(&self.pool).await
    }

    /// Get the underlying connection pool.
    pub fn pool(&self) -> &sqlx::SqlitePool {
        &self.pool
    }
}
