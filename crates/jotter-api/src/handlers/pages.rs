//! Browser-facing page handlers.

use axum::extract::{Path, Query, State};
use axum::response::Html;
use serde::Deserialize;

use jotter_core::{NoteFilter, NoteRepository};

use crate::error::PageError;
use crate::state::AppState;
use crate::views;

/// Query parameters accepted by the listing view.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub q: Option<String>,
    pub tag: Option<String>,
}

/// GET /: the note listing with optional title and tag filters.
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Result<Html<String>, PageError> {
    let filter = NoteFilter {
        query: params.q.filter(|s| !s.is_empty()),
        tag: params.tag.filter(|s| !s.is_empty()),
    };

    let notes = state.db.notes.list(&filter).await?;
    let tags = state.db.notes.distinct_tags().await?;

    Ok(Html(views::index_page(
        &notes,
        filter.query.as_deref(),
        filter.tag.as_deref(),
        &tags,
    )))
}

/// GET /note/new: an empty editor.
pub async fn new_note() -> Html<String> {
    Html(views::edit_page(None))
}

/// GET /note/{id}/edit: the editor populated from the store. Renders
/// the 404 page when no such note exists.
pub async fn edit_note(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, PageError> {
    let note = state.db.notes.fetch(id).await?;
    Ok(Html(views::edit_page(Some(&note))))
}

/// Fallback for unmatched routes: the rendered 404 page.
pub async fn not_found() -> PageError {
    PageError::not_found("Page not found")
}
