use crate::models::{Biodegradability, WasteLabel};
use crate::startup::AppState;
use axum::{extract::State, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model_loaded: bool,
    pub expected_classes: Vec<WasteLabel>,
    pub biodegradable_items: Vec<WasteLabel>,
    pub non_biodegradable_items: Vec<WasteLabel>,
}

/// Always 200: a missing model is reported through `model_loaded`, not the
/// status code.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        model_loaded: state.model_loaded(),
        expected_classes: WasteLabel::ALL.to_vec(),
        biodegradable_items: state.catalog.labels_with(Biodegradability::Biodegradable),
        non_biodegradable_items: state
            .catalog
            .labels_with(Biodegradability::NonBiodegradable),
    })
}
