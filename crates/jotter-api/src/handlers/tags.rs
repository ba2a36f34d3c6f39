//! JSON endpoints: tag aggregation and liveness.

use axum::extract::State;
use axum::Json;

use jotter_core::NoteRepository;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /tags: the deduplicated tag set as a JSON array.
pub async fn list_tags(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    let tags = state.db.notes.distinct_tags().await?;
    Ok(Json(tags))
}

/// GET /health: liveness probe.
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "service": "jotter-api",
    }))
}
