//! Image upload handler.

use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::http::{header, HeaderMap};
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use tracing::info;

use jotter_core::defaults::UPLOAD_URL_PREFIX;
use jotter_core::upload::{check_size, timestamped_name, validate_upload, UploadRejection};
use jotter_core::AcceptedUpload;

use crate::error::ApiError;
use crate::state::AppState;

/// Response from a successful image upload.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// URL path the editor can embed directly.
    pub url: String,
}

impl From<UploadRejection> for ApiError {
    fn from(rejection: UploadRejection) -> Self {
        match rejection {
            UploadRejection::TooLarge(_) => ApiError::PayloadTooLarge(rejection.to_string()),
            other => ApiError::BadRequest(other.to_string()),
        }
    }
}

/// POST /upload-image: validate and persist a multipart image field.
///
/// The filename and declared Content-Length are checked before the
/// body is pulled; the decoded bytes are checked against the limit
/// again afterwards. Nothing touches disk until every check passes.
pub async fn upload_image(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let declared_len = headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok());

    let mut upload: Option<(AcceptedUpload, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("multipart error: {}", e)))?
    {
        if field.name() == Some("image") {
            let filename = field.file_name().map(|n| n.to_string());
            let accepted = validate_upload(filename.as_deref(), declared_len)?;

            let data = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(format!("read error: {}", e)))?;
            upload = Some((accepted, data));
            break;
        }
        // ignore unknown fields
    }

    let (accepted, data) = upload.ok_or(UploadRejection::NoFile)?;
    check_size(data.len() as u64)?;

    // Unique per call at microsecond resolution, so nothing is ever
    // overwritten.
    let saved_name = timestamped_name(Utc::now(), &accepted.filename);
    let path = state.upload_dir.join(&saved_name);

    tokio::fs::write(&path, &data)
        .await
        .map_err(|e| ApiError::Internal(format!("failed to persist upload: {}", e)))?;

    info!(
        subsystem = "api",
        component = "uploads",
        op = "save_image",
        upload_name = %saved_name,
        body_bytes = data.len(),
        "Image stored"
    );

    Ok(Json(UploadResponse {
        url: format!("{}/{}", UPLOAD_URL_PREFIX, saved_name),
    }))
}
