use crate::models::{biodegradability, record_or_empty, Biodegradability, DisposalRecord, WasteLabel};
use crate::startup::AppState;
use axum::{extract::State, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ClassInfo {
    #[serde(rename = "class")]
    pub label: String,
    pub biodegradable: Biodegradability,
    #[serde(serialize_with = "record_or_empty")]
    pub disposal_info: Option<DisposalRecord>,
}

#[derive(Debug, Serialize)]
pub struct ClassesResponse {
    pub classes: Vec<ClassInfo>,
    pub total_classes: usize,
}

pub async fn list_classes(State(state): State<AppState>) -> Json<ClassesResponse> {
    let classes: Vec<ClassInfo> = WasteLabel::ALL
        .iter()
        .map(|label| label.as_str())
        .map(|name| ClassInfo {
            label: name.to_string(),
            biodegradable: biodegradability(name),
            disposal_info: state.catalog.disposal_info(name).cloned(),
        })
        .collect();

    Json(ClassesResponse {
        total_classes: classes.len(),
        classes,
    })
}
