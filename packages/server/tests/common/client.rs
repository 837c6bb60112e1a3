//! HTTP client for integration testing.
//!
//! Drives the axum router in-process via `tower::ServiceExt::oneshot`,
//! no listening socket required.

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// Client for exercising API endpoints in tests.
pub struct ApiClient {
    app: Router,
}

/// Status code plus decoded JSON body of a response.
#[derive(Debug)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl ApiResponse {
    /// Assert the response succeeded, returning the body.
    pub fn expect_ok(self) -> Value {
        assert_eq!(
            self.status,
            StatusCode::OK,
            "expected 200 OK, got {} with body {}",
            self.status,
            self.body
        );
        self.body
    }
}

impl ApiClient {
    pub fn new(app: Router) -> Self {
        Self { app }
    }

    pub async fn get(&self, path: &str) -> ApiResponse {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .expect("Failed to build request");
        self.send(request).await
    }

    pub async fn post(&self, path: &str, body: &Value) -> ApiResponse {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");
        self.send(request).await
    }

    pub async fn put(&self, path: &str) -> ApiResponse {
        let request = Request::builder()
            .method("PUT")
            .uri(path)
            .body(Body::empty())
            .expect("Failed to build request");
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> ApiResponse {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read response body")
            .to_bytes();

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        ApiResponse { status, body }
    }
}
