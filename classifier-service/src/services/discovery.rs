//! Locate and load the model file at startup.
//!
//! A missing or broken model is not fatal: the service starts without one and
//! `/predict` reports it as unavailable.

use super::classifier::ImageClassifier;
use super::onnx::OnnxClassifier;
use crate::config::ModelConfig;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Filenames tried, in order, when the configured one is absent.
pub const ALTERNATIVE_MODEL_FILES: [&str; 4] = [
    "waste_classifier.onnx",
    "waste_classification_model.onnx",
    "model.onnx",
    "garbage_classifier.onnx",
];

/// Return the first existing candidate: `primary`, then each alternative.
pub fn find_model_file(dir: &Path, primary: &str) -> Option<PathBuf> {
    std::iter::once(primary)
        .chain(ALTERNATIVE_MODEL_FILES)
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file())
}

/// All `.onnx` files in `dir`, sorted by name.
pub fn list_model_files(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = match std::fs::read_dir(dir) {
        Ok(entries) => entries
            .filter_map(Result::ok)
            .filter(|entry| {
                entry
                    .path()
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("onnx"))
            })
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect(),
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "Cannot list model directory");
            Vec::new()
        }
    };
    names.sort();
    names
}

/// Discover and load the classifier described by `config`.
pub fn load_classifier(config: &ModelConfig) -> Option<Arc<dyn ImageClassifier>> {
    let available = list_model_files(&config.dir);
    tracing::info!(
        dir = %config.dir.display(),
        available = ?available,
        "Searching for model file"
    );

    let Some(path) = find_model_file(&config.dir, &config.file_name) else {
        tracing::error!(
            wanted = %config.file_name,
            available = ?available,
            "No model file found; /predict will be unavailable"
        );
        return None;
    };

    if path.file_name().and_then(|n| n.to_str()) != Some(config.file_name.as_str()) {
        tracing::info!(path = %path.display(), "Found model with alternative name");
    }

    match OnnxClassifier::load(&path, config.input_size) {
        Ok(classifier) => {
            tracing::info!(
                path = %path.display(),
                input_size = config.input_size,
                "Model loaded successfully"
            );
            Some(Arc::new(classifier))
        }
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "Error loading model");
            None
        }
    }
}
