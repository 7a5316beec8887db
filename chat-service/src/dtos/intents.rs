use crate::models::ResponseType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct IntentTestRequest {
    #[serde(default)]
    pub messages: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentResult {
    pub message: String,
    pub detected_intent: ResponseType,
    /// Length in characters, not bytes.
    pub message_length: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentTestResponse {
    pub results: Vec<IntentResult>,
}
