use crate::config::ChatConfig;
use crate::handlers;
use crate::services::{GenerationBackend, GenerationParams, OllamaBackend};
use axum::{
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
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn GenerationBackend>,
    pub params: Arc<GenerationParams>,
    pub health_timeout: Duration,
}

impl AppState {
    pub fn new(
        backend: Arc<dyn GenerationBackend>,
        params: GenerationParams,
        health_timeout: Duration,
    ) -> Self {
        Self {
            backend,
            params: Arc::new(params),
            health_timeout,
        }
    }

    pub fn from_config(config: &ChatConfig, backend: Arc<dyn GenerationBackend>) -> Self {
        let params = GenerationParams {
            model: config.backend.model.clone(),
            temperature: config.sampling.temperature,
            top_p: config.sampling.top_p,
            max_tokens: config.sampling.max_tokens,
            timeout: config.backend.request_timeout,
        };
        Self::new(backend, params, config.backend.health_timeout)
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/chat", post(handlers::chat))
        .route("/health", get(handlers::health_check))
        .route("/test-intents", post(handlers::test_intents))
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
}

impl Application {
    pub async fn build(config: ChatConfig) -> Result<Self, AppError> {
        let backend = OllamaBackend::with_connect_timeout(
            config.backend.base_url.clone(),
            config.backend.connect_timeout,
        )
            .map_err(|e| AppError::InternalError(anyhow::anyhow!(e)))?;
        let state = AppState::from_config(&config, Arc::new(backend));

        Self::with_state(config, state).await
    }

    pub async fn with_state(config: ChatConfig, state: AppState) -> Result<Self, AppError> {
        let app = build_router(state.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!(
            port,
            backend = state.backend.name(),
            base_url = %config.backend.base_url,
            model = %state.params.model,
            "Chat service listening"
        );

        let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
