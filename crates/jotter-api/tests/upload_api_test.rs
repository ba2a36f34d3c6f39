//! Upload endpoint tests: validation outcomes, persistence, and
//! serving the stored file back.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use jotter_api::{app, AppState};
use jotter_db::test_fixtures::memory_database;

const BOUNDARY: &str = "jottertestboundary";

async fn test_app() -> (axum::Router, tempfile::TempDir) {
    let db = memory_database().await;
    let uploads = tempfile::tempdir().expect("temp upload dir");
    let state = AppState {
        db,
        upload_dir: uploads.path().to_path_buf(),
    };
    (app(state), uploads)
}

fn multipart_body(field: &str, filename: &str, data: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn upload_request(body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/upload-image")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .header(header::CONTENT_LENGTH, body.len().to_string())
        .body(Body::from(body))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn upload_small_png_succeeds() {
    let (app, uploads) = test_app().await;

    let body = multipart_body("image", "a.png", &[0u8; 1024]);
    let response = app.oneshot(upload_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    let url = json["url"].as_str().unwrap();
    assert!(url.starts_with("/static/uploads/"));
    assert!(url.ends_with("_a.png"));

    // The file landed in the upload directory under the returned name.
    let saved_name = url.rsplit('/').next().unwrap();
    let on_disk = uploads.path().join(saved_name);
    assert_eq!(std::fs::metadata(&on_disk).unwrap().len(), 1024);
}

#[tokio::test]
async fn uploaded_file_is_served_back() {
    let (app, _uploads) = test_app().await;

    let payload = b"not really a png but served verbatim";
    let body = multipart_body("image", "pic.png", payload);
    let response = app.clone().oneshot(upload_request(body)).await.unwrap();
    let url = json_body(response).await["url"].as_str().unwrap().to_string();

    let served = app
        .oneshot(Request::builder().uri(&url).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(served.status(), StatusCode::OK);

    let bytes = served.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], payload);
}

#[tokio::test]
async fn upload_exe_is_rejected_with_400() {
    let (app, uploads) = test_app().await;

    let body = multipart_body("image", "a.exe", &[0u8; 128]);
    let response = app.oneshot(upload_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = json_body(response).await;
    assert_eq!(json["error"], "invalid extension: exe");

    // Rejected before any mutation: nothing was written.
    assert_eq!(std::fs::read_dir(uploads.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn upload_six_mib_is_rejected_with_413() {
    let (app, uploads) = test_app().await;

    let body = multipart_body("image", "a.png", &vec![0u8; 6 * 1024 * 1024]);
    let response = app.oneshot(upload_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

    let json = json_body(response).await;
    assert!(json["error"].as_str().unwrap().contains("too large"));
    assert_eq!(std::fs::read_dir(uploads.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn upload_without_file_part_is_rejected() {
    let (app, _uploads) = test_app().await;

    let body = multipart_body("attachment", "a.png", &[0u8; 16]);
    let response = app.oneshot(upload_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = json_body(response).await;
    assert_eq!(json["error"], "no file supplied");
}

#[tokio::test]
async fn upload_with_empty_filename_is_rejected() {
    let (app, _uploads) = test_app().await;

    let body = multipart_body("image", "", &[0u8; 16]);
    let response = app.oneshot(upload_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = json_body(response).await;
    assert_eq!(json["error"], "empty filename");
}

#[tokio::test]
async fn upload_sanitizes_path_components() {
    let (app, uploads) = test_app().await;

    let body = multipart_body("image", "../../escape.png", &[0u8; 64]);
    let response = app.oneshot(upload_request(body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = json_body(response).await;
    let url = json["url"].as_str().unwrap();
    assert!(url.ends_with("_escape.png"));

    // Saved inside the upload directory, not above it.
    let saved_name = url.rsplit('/').next().unwrap();
    assert!(uploads.path().join(saved_name).exists());
}
