use crate::models::PredictionResult;
use crate::services::{ImageTensor, InferenceError};
use crate::startup::AppState;
use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use metrics::{counter, histogram};
use service_core::error::AppError;
use std::time::Instant;

/// Multipart field carrying the photo.
pub const FILE_FIELD: &str = "file";

struct Upload {
    file_name: String,
    data: Vec<u8>,
}

pub async fn predict(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<PredictionResult>, AppError> {
    let classifier = state.classifier.clone().ok_or_else(|| {
        tracing::warn!("Prediction requested but no model is loaded");
        AppError::ServiceUnavailable("Model not loaded. Check server logs.".to_string())
    })?;

    let mut multipart = multipart.map_err(|e| {
        tracing::debug!(error = %e, "Request is not a multipart upload");
        AppError::bad_request("No file uploaded")
    })?;
    let upload = read_upload(&mut multipart).await?;

    tracing::info!(
        filename = %upload.file_name,
        size = upload.data.len(),
        "Classifying uploaded image"
    );

    let start = Instant::now();
    let input_size = classifier.input_size();
    let probabilities = tokio::task::spawn_blocking(move || {
        let tensor = ImageTensor::from_bytes(&upload.data, input_size)?;
        classifier.classify(&tensor)
    })
    .await
    .map_err(|e| InferenceError::Task(e.to_string()))
    .and_then(|inner| inner)
    .map_err(processing_error)?;

    histogram!("classifier_inference_duration_seconds").record(start.elapsed().as_secs_f64());
    tracing::debug!(raw = ?probabilities, "Raw model output");

    let result = PredictionResult::from_probabilities(&probabilities, &state.catalog)
        .map_err(processing_error)?;

    counter!("classifier_predictions_total", "class" => result.label.as_str()).increment(1);
    tracing::info!(
        predicted_class = %result.label,
        confidence = result.confidence,
        "Prediction completed"
    );

    Ok(Json(result))
}

/// Find the `file` part. Parts without a filename are form fields, not files.
async fn read_upload(multipart: &mut Multipart) -> Result<Upload, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        AppError::BadRequest(anyhow::anyhow!("Failed to read multipart field: {}", e))
    })? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let Some(file_name) = field.file_name().map(str::to_string) else {
            continue;
        };
        if file_name.is_empty() {
            return Err(AppError::bad_request("No file selected"));
        }

        let data = field.bytes().await.map_err(|e| {
            AppError::BadRequest(anyhow::anyhow!("Failed to read file bytes: {}", e))
        })?;

        return Ok(Upload {
            file_name,
            data: data.to_vec(),
        });
    }

    Err(AppError::bad_request("No file uploaded"))
}

fn processing_error(err: InferenceError) -> AppError {
    tracing::error!(error = %err, "Prediction error");
    counter!("classifier_prediction_errors_total").increment(1);
    AppError::ProcessingError(format!("Error processing image: {}", err))
}
