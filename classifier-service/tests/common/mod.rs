//! Shared fixtures for router tests: a stub model and multipart helpers.

#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use classifier_service::models::DisposalCatalog;
use classifier_service::services::{ImageClassifier, ImageTensor, InferenceError};
use classifier_service::{build_router, AppState};
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::util::ServiceExt;

pub const BOUNDARY: &str = "----classifier-test-boundary";

/// Returns a fixed probability vector and counts calls.
pub struct StubClassifier {
    output: Vec<f32>,
    pub calls: AtomicUsize,
}

impl StubClassifier {
    pub fn new(output: Vec<f32>) -> Self {
        Self {
            output,
            calls: AtomicUsize::new(0),
        }
    }
}

impl ImageClassifier for StubClassifier {
    fn classify(&self, input: &ImageTensor) -> Result<Vec<f32>, InferenceError> {
        assert_eq!(input.shape(), [1, 224, 224, 3]);
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.output.clone())
    }

    fn input_size(&self) -> u32 {
        224
    }

    fn describe(&self) -> String {
        "stub".to_string()
    }
}

pub struct TestApp {
    pub router: Router,
    pub classifier: Option<Arc<StubClassifier>>,
}

impl TestApp {
    pub fn with_output(output: Vec<f32>) -> Self {
        let classifier = Arc::new(StubClassifier::new(output));
        let state = AppState::new(
            Some(classifier.clone() as Arc<dyn ImageClassifier>),
            DisposalCatalog::standard(),
            16 * 1024 * 1024,
        );
        Self {
            router: build_router(state),
            classifier: Some(classifier),
        }
    }

    /// Serve with a real classifier, e.g. one loaded from a model file.
    pub fn with_classifier(classifier: Arc<dyn ImageClassifier>) -> Self {
        let state = AppState::new(
            Some(classifier),
            DisposalCatalog::standard(),
            16 * 1024 * 1024,
        );
        Self {
            router: build_router(state),
            classifier: None,
        }
    }

    pub fn without_model() -> Self {
        let state = AppState::new(None, DisposalCatalog::standard(), 16 * 1024 * 1024);
        Self {
            router: build_router(state),
            classifier: None,
        }
    }

    pub fn calls(&self) -> usize {
        self.classifier
            .as_ref()
            .map(|c| c.calls.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    pub async fn post_multipart(&self, body: Vec<u8>) -> (StatusCode, serde_json::Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/predict")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(body))
            .unwrap();
        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, body)
    }
}

/// One multipart part. `file_name: None` makes it a plain form field.
pub struct Part<'a> {
    pub name: &'a str,
    pub file_name: Option<&'a str>,
    pub content_type: &'a str,
    pub data: &'a [u8],
}

pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        match part.file_name {
            Some(file_name) => body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                    part.name, file_name
                )
                .as_bytes(),
            ),
            None => body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{}\"\r\n", part.name).as_bytes(),
            ),
        }
        body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", part.content_type).as_bytes());
        body.extend_from_slice(part.data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

pub fn file_upload(file_name: &str, data: &[u8]) -> Vec<u8> {
    multipart_body(&[Part {
        name: "file",
        file_name: Some(file_name),
        content_type: "image/png",
        data,
    }])
}

/// A small solid-colour PNG.
pub fn sample_png() -> Vec<u8> {
    let img = DynamicImage::ImageRgb8(ImageBuffer::from_pixel(32, 24, Rgb([120u8, 90, 60])));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}
