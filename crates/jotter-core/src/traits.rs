//! Core traits for jotter abstractions.
//!
//! The repository trait is the seam between the HTTP layer and the
//! store: handlers receive an implementation through application
//! state rather than reaching for a process-wide handle.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Note, NoteDraft, NoteFilter, NoteSummary};

/// Repository for note persistence.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// List notes ordered by `updated_at` descending. The filter's
    /// `query` restricts to titles containing the substring
    /// (case-sensitive) and `tag` to tags fields containing the
    /// substring; both are ANDed when present.
    async fn list(&self, filter: &NoteFilter) -> Result<Vec<NoteSummary>>;

    /// Fetch a full note by id.
    async fn fetch(&self, id: i64) -> Result<Note>;

    /// Save a draft over the first existing row (ascending id), or
    /// insert when the table is empty.
    ///
    /// This is the single-note overwrite rule: any id carried by the
    /// draft is ignored for row selection, `created_at` is preserved
    /// on overwrite, and `updated_at` is always set to the current
    /// UTC time. Returns the stored note.
    async fn overwrite_first(&self, draft: NoteDraft) -> Result<Note>;

    /// Delete a note by id. Fails with `NoteNotFound` when no row
    /// with that id exists.
    async fn delete(&self, id: i64) -> Result<()>;

    /// Check if a note exists.
    async fn exists(&self, id: i64) -> Result<bool>;

    /// Collect the deduplicated tag set across all non-empty tags
    /// fields, tokens trimmed.
    async fn distinct_tags(&self) -> Result<Vec<String>>;
}
