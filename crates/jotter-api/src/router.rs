//! Route table and middleware stack.

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderName, Request};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use jotter_core::defaults::MAX_UPLOAD_BYTES;

use crate::error::ApiError;
use crate::handlers::{notes, pages, tags, uploads};
use crate::state::AppState;

/// Slack on top of the upload limit (multipart framing, form
/// overhead), so the handler's own size check produces the 413 before
/// the transport-level cap cuts the body off.
const BODY_LIMIT_SLACK: u64 = 64 * 1024;

/// Generates time-ordered UUIDv7 request correlation IDs.
///
/// UUIDv7 embeds a Unix timestamp, so IDs sort chronologically in the
/// logs.
#[derive(Clone, Default)]
struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

/// Reject requests whose declared length exceeds the limit before any
/// body bytes are read, with the JSON error body AJAX callers expect.
async fn reject_oversized(request: Request<axum::body::Body>, next: Next) -> Response {
    let declared = request
        .headers()
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok());

    if let Some(len) = declared {
        if len > MAX_UPLOAD_BYTES {
            return ApiError::PayloadTooLarge(format!("request body too large: {} bytes", len))
                .into_response();
        }
    }

    next.run(request).await
}

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let x_request_id = HeaderName::from_static("x-request-id");
    let body_limit = (MAX_UPLOAD_BYTES + BODY_LIMIT_SLACK) as usize;

    Router::new()
        .route("/", get(pages::index))
        .route("/note/new", get(pages::new_note))
        .route("/note/:id/edit", get(pages::edit_note))
        .route("/note/save", post(notes::save_note))
        .route("/note/:id/delete", post(notes::delete_note))
        .route("/upload-image", post(uploads::upload_image))
        .route("/tags", get(tags::list_tags))
        .route("/health", get(tags::health_check))
        .nest_service(
            "/static/uploads",
            ServeDir::new(state.upload_dir.clone()),
        )
        .fallback(pages::not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(RequestBodyLimitLayer::new(body_limit))
        // Outside the body-limit layers so a declared oversize gets
        // the JSON 413 instead of the layer's bare response.
        .layer(middleware::from_fn(reject_oversized))
        .layer(PropagateRequestIdLayer::new(x_request_id.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(x_request_id, MakeRequestUuidV7))
        .with_state(state)
}
