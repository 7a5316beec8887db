use crate::dtos::{IntentResult, IntentTestRequest, IntentTestResponse};
use crate::services::analyze_intent;
use axum::{extract::rejection::JsonRejection, Json};

/// Diagnostic: report the intent each message would be classified as. An
/// unreadable body is treated as an empty message list.
pub async fn test_intents(
    payload: Result<Json<IntentTestRequest>, JsonRejection>,
) -> Json<IntentTestResponse> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Intent test body is not valid JSON");
            IntentTestRequest::default()
        }
    };

    let results = request
        .messages
        .into_iter()
        .map(|message| IntentResult {
            detected_intent: analyze_intent(&message),
            message_length: message.chars().count(),
            message,
        })
        .collect();

    Json(IntentTestResponse { results })
}
