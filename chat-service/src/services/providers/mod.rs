//! Text-generation backends.
//!
//! `/chat` and `/health` talk to the backend only through
//! [`GenerationBackend`], so the Ollama client can be swapped for the mock in
//! tests.

pub mod mock;
pub mod ollama;

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

pub use mock::MockBackend;
pub use ollama::OllamaBackend;

/// Error type for backend calls.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProviderError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Backend returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("{0}")]
    Other(String),
}

/// Generation parameters for one prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    pub model: String,

    /// Temperature (0.0 - 2.0).
    pub temperature: f32,

    /// Top-p sampling.
    pub top_p: f32,

    /// Maximum output tokens.
    pub max_tokens: u32,

    pub timeout: Duration,
}

#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Generate a complete, non-streamed reply to `prompt`.
    async fn generate(&self, prompt: &str, params: &GenerationParams)
        -> Result<String, ProviderError>;

    /// Names of the models the backend can serve.
    async fn list_models(&self, timeout: Duration) -> Result<Vec<String>, ProviderError>;

    /// Short identifier used in logs.
    fn name(&self) -> &str;
}
