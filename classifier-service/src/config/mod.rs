use serde::Deserialize;
use service_core::config::{self as core_config, get_env, get_env_parsed};
use service_core::error::AppError;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MODEL_FILE: &str = "waste_classifier_model.onnx";
pub const DEFAULT_INPUT_SIZE: u32 = 224;
/// Phone photos routinely exceed axum's 2MB default body limit.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub model: ModelConfig,
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Directory searched for the model file.
    pub dir: PathBuf,
    /// Preferred filename; alternatives are tried when it is absent.
    pub file_name: String,
    /// Side length of the square input image.
    pub input_size: u32,
}

impl ClassifierConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load(DEFAULT_PORT)?;
        let is_prod = core_config::is_prod();

        let input_size = get_env_parsed("MODEL_INPUT_SIZE", DEFAULT_INPUT_SIZE, is_prod)?;
        if input_size == 0 {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "MODEL_INPUT_SIZE must be positive"
            )));
        }

        Ok(ClassifierConfig {
            common: common_config,
            model: ModelConfig {
                dir: PathBuf::from(get_env("MODEL_DIR", Some("."), is_prod)?),
                file_name: get_env("MODEL_FILE", Some(DEFAULT_MODEL_FILE), is_prod)?,
                input_size,
            },
            max_upload_bytes: get_env_parsed(
                "MAX_UPLOAD_BYTES",
                DEFAULT_MAX_UPLOAD_BYTES,
                is_prod,
            )?,
        })
    }
}
