use crate::services::ProviderError;
use crate::startup::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum HealthResponse {
    Healthy {
        available_models: Vec<String>,
        timestamp: DateTime<Utc>,
    },
    Unhealthy {
        error: String,
    },
}

/// Probe the backend's model list. Any failure is a 500.
pub async fn health_check(State(state): State<AppState>) -> Response {
    match state.backend.list_models(state.health_timeout).await {
        Ok(available_models) => Json(HealthResponse::Healthy {
            available_models,
            timestamp: Utc::now(),
        })
        .into_response(),
        Err(err) => {
            tracing::warn!(error = %err, "Backend health probe failed");
            let error = match err {
                ProviderError::Status { .. } => "Could not connect to Ollama".to_string(),
                other => other.to_string(),
            };
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthResponse::Unhealthy { error }),
            )
                .into_response()
        }
    }
}
