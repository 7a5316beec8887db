//! In-process backend for tests and local runs without Ollama.

use super::{GenerationBackend, GenerationParams, ProviderError};
use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;

enum Behaviour {
    Reply(String),
    Fail(ProviderError),
}

/// Answers every prompt the same way and remembers the prompts it saw.
pub struct MockBackend {
    behaviour: Behaviour,
    models: Vec<String>,
    prompts: Mutex<Vec<String>>,
}

impl MockBackend {
    pub fn replying(reply: impl Into<String>) -> Self {
        Self::with(Behaviour::Reply(reply.into()))
    }

    pub fn failing(error: ProviderError) -> Self {
        Self::with(Behaviour::Fail(error))
    }

    fn with(behaviour: Behaviour) -> Self {
        Self {
            behaviour,
            models: vec!["mock".to_string()],
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn with_models(mut self, models: Vec<String>) -> Self {
        self.models = models;
        self
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl GenerationBackend for MockBackend {
    async fn generate(
        &self,
        prompt: &str,
        _params: &GenerationParams,
    ) -> Result<String, ProviderError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }

        match &self.behaviour {
            Behaviour::Reply(reply) => Ok(reply.clone()),
            Behaviour::Fail(error) => Err(error.clone()),
        }
    }

    async fn list_models(&self, _timeout: Duration) -> Result<Vec<String>, ProviderError> {
        match &self.behaviour {
            Behaviour::Reply(_) => Ok(self.models.clone()),
            Behaviour::Fail(error) => Err(error.clone()),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
