//! Form handlers for saving and deleting notes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::Form;
use serde::Deserialize;

use jotter_core::{NoteDraft, NoteRepository};

use crate::error::ApiError;
use crate::state::AppState;

/// Fields submitted by the editor form.
///
/// The id arrives as text so an empty hidden field deserializes
/// cleanly; it is parsed for round-tripping only; row selection
/// always follows the overwrite rule.
#[derive(Debug, Deserialize)]
pub struct SaveForm {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: String,
}

/// POST /note/save: persist the draft and return to the listing.
pub async fn save_note(
    State(state): State<AppState>,
    Form(form): Form<SaveForm>,
) -> Result<Redirect, ApiError> {
    let draft = NoteDraft {
        id: form.id.as_deref().and_then(|s| s.trim().parse().ok()),
        title: form.title,
        content: form.content,
        tags: form.tags,
    };

    state.db.notes.overwrite_first(draft).await?;
    Ok(Redirect::to("/"))
}

/// POST /note/{id}/delete: 204 on success, 404 JSON when absent.
pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.db.notes.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
