//! Shared fixtures for router tests.

#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chat_service::services::{GenerationBackend, GenerationParams, MockBackend};
use chat_service::{build_router, AppState};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tower::util::ServiceExt;

pub fn test_params() -> GenerationParams {
    GenerationParams {
        model: "phi3:mini".to_string(),
        temperature: 0.5,
        top_p: 0.8,
        max_tokens: 30,
        timeout: Duration::from_secs(2),
    }
}

pub struct TestApp {
    pub router: Router,
    pub mock: Option<Arc<MockBackend>>,
}

impl TestApp {
    pub fn with_mock(mock: MockBackend) -> Self {
        let mock = Arc::new(mock);
        let backend: Arc<dyn GenerationBackend> = mock.clone();
        Self {
            router: build_router(AppState::new(backend, test_params(), Duration::from_secs(1))),
            mock: Some(mock),
        }
    }

    pub fn with_backend(backend: Arc<dyn GenerationBackend>) -> Self {
        Self {
            router: build_router(AppState::new(backend, test_params(), Duration::from_secs(1))),
            mock: None,
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.mock.as_ref().map(|m| m.prompts()).unwrap_or_default()
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }
}
