//! Ollama backend over its REST API (`/api/generate`, `/api/tags`).

use super::{GenerationBackend, GenerationParams, ProviderError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const NO_RESPONSE: &str = "No response from model";

pub struct OllamaBackend {
    base_url: String,
    client: Client,
}

/// Connection setup bound used by [`OllamaBackend::new`].
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

impl OllamaBackend {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderError> {
        Self::with_connect_timeout(base_url, DEFAULT_CONNECT_TIMEOUT)
    }

    /// Overall timeouts are set per request. `connect_timeout` bounds only
    /// connection setup, so a server that never accepts is reported as a
    /// connection failure rather than a timeout.
    pub fn with_connect_timeout(
        base_url: impl Into<String>,
        connect_timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| ProviderError::Other(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path)
    }
}

/// A connect timeout sets both `is_connect` and `is_timeout`; it counts as a
/// connection failure.
fn classify_error(err: reqwest::Error, timeout: Duration) -> ProviderError {
    if err.is_connect() {
        ProviderError::Connection(err.to_string())
    } else if err.is_timeout() {
        ProviderError::Timeout(timeout)
    } else if err.is_decode() {
        ProviderError::InvalidResponse(err.to_string())
    } else {
        ProviderError::Other(err.to_string())
    }
}

#[async_trait]
impl GenerationBackend for OllamaBackend {
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, ProviderError> {
        let request = GenerateRequest {
            model: &params.model,
            prompt,
            stream: false,
            options: GenerateOptions {
                temperature: params.temperature,
                top_p: params.top_p,
                num_predict: params.max_tokens,
            },
        };

        tracing::debug!(
            model = %params.model,
            prompt_len = prompt.len(),
            "Sending request to Ollama"
        );

        let response = self
            .client
            .post(self.api_url("generate"))
            .timeout(params.timeout)
            .json(&request)
            .send()
            .await
            .map_err(|e| classify_error(e, params.timeout))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status { status, body });
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| classify_error(e, params.timeout))?;

        Ok(body
            .response
            .unwrap_or_else(|| NO_RESPONSE.to_string())
            .trim()
            .to_string())
    }

    async fn list_models(&self, timeout: Duration) -> Result<Vec<String>, ProviderError> {
        let response = self
            .client
            .get(self.api_url("tags"))
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| classify_error(e, timeout))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status { status, body });
        }

        let tags: TagsResponse = response
            .json()
            .await
            .map_err(|e| classify_error(e, timeout))?;

        Ok(tags.models.into_iter().map(|m| m.name).collect())
    }

    fn name(&self) -> &str {
        "ollama"
    }
}

// Ollama API types

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Debug, Serialize)]
struct GenerateOptions {
    temperature: f32,
    top_p: f32,
    num_predict: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Vec<ModelTag>,
}

#[derive(Debug, Deserialize)]
struct ModelTag {
    name: String,
}
