//! Helpers for driving the HTTP router in integration tests.

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, Response},
    Router,
};
use portfolio::server::{model::app::AppState, router};
use portfolio_test_utils::TestContext;

const BOUNDARY: &str = "portfolio-test-boundary";

/// Router over a fresh state, the state is returned so tests can inspect the search mirror
pub fn app(test: &TestContext) -> (Router, AppState) {
    let state: AppState = test.to_app_state();

    (router::routes().with_state(state.clone()), state)
}

/// Multipart POST with `bytes` in the `file` field
pub fn upload_request(uri: &str, bytes: &[u8]) -> Request<Body> {
    upload_request_with_field(uri, "file", bytes)
}

pub fn upload_request_with_field(uri: &str, field: &str, bytes: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"{field}\"; filename=\"upload.xlsx\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(
        b"Content-Type: application/vnd.openxmlformats-officedocument.spreadsheetml.sheet\r\n\r\n",
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn json_request(method: &str, uri: &str, json: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json.to_string()))
        .unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json<T: serde::de::DeserializeOwned>(response: Response<Body>) -> T {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
