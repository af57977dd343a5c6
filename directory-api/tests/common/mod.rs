/// Common test utilities for integration tests
///
/// Builds the full router over an in-memory store and provides request
/// helpers that return the status and decoded JSON body.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use directory_api::app::{build_router, AppState};
use directory_api::config::Config;
use directory_shared::store::MemoryStore;
use serde_json::Value;
use std::sync::Arc;
use tower::Service as _;

/// Test context containing the router under test
pub struct TestContext {
    pub app: axum::Router,
}

impl TestContext {
    /// Creates a router over a fresh, empty store
    pub fn new() -> Self {
        let state = AppState::new(Arc::new(MemoryStore::new()), Config::in_memory());
        Self {
            app: build_router(state),
        }
    }

    /// Sends a request and returns status plus JSON body
    pub async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);

        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .app
            .clone()
            .call(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, json)
    }

    /// Sends a raw (possibly malformed) JSON body
    pub async fn send_raw(&self, method: &str, uri: &str, raw: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(raw.to_string()))
            .unwrap();

        let response = self.app.clone().call(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    /// Creates an employee and returns its id, panicking on failure
    pub async fn create_employee(&self, name: &str, email: &str, position: &str) -> String {
        let (status, body) = self
            .send(
                "POST",
                "/employees",
                Some(serde_json::json!({ "name": name, "email": email, "position": position })),
            )
            .await;

        assert_eq!(status, StatusCode::CREATED, "create failed: {}", body);
        body["data"]["id"].as_str().unwrap().to_string()
    }
}
