//! Shared application state.

use std::path::PathBuf;

use jotter_db::Database;

/// Application state shared across handlers.
///
/// Handlers receive the store through this state rather than a
/// process-wide handle; each request borrows a pooled connection for
/// the duration of its queries and releases it on every exit path.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    /// Directory uploaded images are persisted into.
    pub upload_dir: PathBuf,
}
