//! HTTP error mapping.
//!
//! Two error surfaces exist side by side: [`ApiError`] serializes as a
//! `{"error": msg}` JSON body for the AJAX-style endpoints, while
//! [`PageError`] renders the HTML error page for browser navigation.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;

use crate::views;

/// Error type for JSON endpoints.
#[derive(Debug)]
pub enum ApiError {
    Database(jotter_core::Error),
    NotFound(String),
    BadRequest(String),
    PayloadTooLarge(String),
    Internal(String),
}

impl From<jotter_core::Error> for ApiError {
    fn from(err: jotter_core::Error) -> Self {
        match &err {
            jotter_core::Error::NotFound(msg) => ApiError::NotFound(msg.clone()),
            jotter_core::Error::NoteNotFound(id) => {
                ApiError::NotFound(format!("Note {} not found", id))
            }
            jotter_core::Error::InvalidInput(msg) => ApiError::BadRequest(msg.clone()),
            _ => ApiError::Database(err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Store and I/O failures surface as a generic 500; the detail
        // goes to the log, never to the client.
        let (status, message) = match self {
            ApiError::Database(err) => {
                tracing::error!(error = %err, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::PayloadTooLarge(msg) => (StatusCode::PAYLOAD_TOO_LARGE, msg),
        };

        let body = Json(serde_json::json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}

/// Error type for browser-facing routes.
#[derive(Debug)]
pub struct PageError {
    pub status: StatusCode,
    pub message: String,
}

impl PageError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl From<jotter_core::Error> for PageError {
    fn from(err: jotter_core::Error) -> Self {
        match err {
            jotter_core::Error::NoteNotFound(id) => {
                Self::not_found(format!("Note {} not found", id))
            }
            jotter_core::Error::NotFound(msg) => Self::not_found(msg),
            other => {
                tracing::error!(error = %other, "page request failed");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: "Something went wrong".to_string(),
                }
            }
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let page = views::error_page(self.status.as_u16(), &self.message);
        (self.status, Html(page)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_not_found_maps_to_404() {
        let err: ApiError = jotter_core::Error::NoteNotFound(7).into();
        match err {
            ApiError::NotFound(msg) => assert_eq!(msg, "Note 7 not found"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_database_error_maps_to_catch_all() {
        let err: ApiError = jotter_core::Error::Internal("boom".to_string()).into();
        assert!(matches!(err, ApiError::Database(_)));
    }

    #[test]
    fn test_page_error_from_missing_note() {
        let err: PageError = jotter_core::Error::NoteNotFound(3).into();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert!(err.message.contains('3'));
    }
}
