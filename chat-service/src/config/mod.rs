use serde::Deserialize;
use service_core::config::{self as core_config, get_env, get_env_parsed};
use service_core::error::AppError;
use std::time::Duration;

pub const DEFAULT_PORT: u16 = 5001;

#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub backend: BackendConfig,
    pub sampling: SamplingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Ollama server root, e.g. `http://localhost:11434`.
    pub base_url: String,
    /// Model name passed to `/api/generate`.
    pub model: String,
    /// Upper bound for one generation call.
    pub request_timeout: Duration,
    /// Upper bound for the `/api/tags` probe behind `/health`.
    pub health_timeout: Duration,
    /// Upper bound for connection setup alone.
    pub connect_timeout: Duration,
}

/// Fixed sampling options sent with every prompt.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SamplingConfig {
    pub temperature: f32,
    pub top_p: f32,
    /// Output token cap.
    pub max_tokens: u32,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            temperature: 0.5,
            top_p: 0.8,
            max_tokens: 30,
        }
    }
}

impl ChatConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load(DEFAULT_PORT)?;
        let is_prod = core_config::is_prod();
        let defaults = SamplingConfig::default();

        let base_url = get_env("OLLAMA_BASE_URL", Some("http://localhost:11434"), is_prod)?;

        Ok(ChatConfig {
            common: common_config,
            backend: BackendConfig {
                base_url: base_url.trim_end_matches('/').to_string(),
                model: get_env("CHAT_MODEL", Some("phi3:mini"), is_prod)?,
                request_timeout: Duration::from_secs(get_env_parsed(
                    "CHAT_TIMEOUT_SECS",
                    60u64,
                    is_prod,
                )?),
                health_timeout: Duration::from_secs(get_env_parsed(
                    "HEALTH_TIMEOUT_SECS",
                    5u64,
                    is_prod,
                )?),
                connect_timeout: Duration::from_secs(get_env_parsed(
                    "CONNECT_TIMEOUT_SECS",
                    5u64,
                    is_prod,
                )?),
            },
            sampling: SamplingConfig {
                temperature: get_env_parsed("CHAT_TEMPERATURE", defaults.temperature, is_prod)?,
                top_p: get_env_parsed("CHAT_TOP_P", defaults.top_p, is_prod)?,
                max_tokens: get_env_parsed("CHAT_MAX_TOKENS", defaults.max_tokens, is_prod)?,
            },
        })
    }
}
