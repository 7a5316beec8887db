use crate::models::ResponseType;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    /// Language code; `null` or a non-string value counts as absent.
    #[serde(default, deserialize_with = "string_or_none")]
    pub lang: Option<String>,
}

impl ChatRequest {
    pub fn lang_code(&self) -> &str {
        self.lang.as_deref().unwrap_or("en")
    }
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Success and error bodies share this shape; errors omit `response_type`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_type: Option<ResponseType>,
}

impl ChatResponse {
    pub fn brief(response: String) -> Self {
        Self {
            response,
            response_type: Some(ResponseType::Brief),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            response: message.into(),
            response_type: None,
        }
    }
}
