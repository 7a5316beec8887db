use crate::config::ClassifierConfig;
use crate::handlers;
use crate::models::DisposalCatalog;
use crate::services::{load_classifier, ImageClassifier};
use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{http_trace_layer, metrics_middleware, request_id_middleware};
use service_core::observability::metrics_endpoint;
use service_core::shutdown::shutdown_signal;
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

#[derive(Clone)]
pub struct AppState {
    /// `None` when no model could be loaded at startup.
    pub classifier: Option<Arc<dyn ImageClassifier>>,
    pub catalog: Arc<DisposalCatalog>,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(
        classifier: Option<Arc<dyn ImageClassifier>>,
        catalog: DisposalCatalog,
        max_upload_bytes: usize,
    ) -> Self {
        Self {
            classifier,
            catalog: Arc::new(catalog),
            max_upload_bytes,
        }
    }

    pub fn model_loaded(&self) -> bool {
        self.classifier.is_some()
    }
}

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.max_upload_bytes;

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/classes", get(handlers::list_classes))
        .route(
            "/predict",
            post(handlers::predict).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
        .layer(from_fn(metrics_middleware))
        .layer(http_trace_layer())
        .layer(from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
    state: AppState,
}

impl Application {
    pub async fn build(config: ClassifierConfig) -> Result<Self, AppError> {
        let classifier = load_classifier(&config.model);
        let state = AppState::new(
            classifier,
            DisposalCatalog::standard(),
            config.max_upload_bytes,
        );

        Self::with_state(config, state).await
    }

    /// Bind and serve an already assembled state; tests use this to inject a
    /// stub classifier.
    pub async fn with_state(config: ClassifierConfig, state: AppState) -> Result<Self, AppError> {
        let app = build_router(state.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        let model = state.classifier.as_ref().map(|c| c.describe());
        tracing::info!(
            port,
            model = model.as_deref().unwrap_or("none"),
            "Classifier service listening"
        );

        let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
            state,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn model_loaded(&self) -> bool {
        self.state.model_loaded()
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
