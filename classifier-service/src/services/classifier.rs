//! Model abstraction.
//!
//! Handlers only see [`ImageClassifier`], so the ONNX-backed implementation
//! can be replaced by a fixed-output stub in tests.

use super::preprocess::ImageTensor;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InferenceError {
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("inference failed: {0}")]
    Model(String),

    #[error("invalid model output: {0}")]
    InvalidOutput(String),

    #[error("inference task failed: {0}")]
    Task(String),
}

/// A loaded classification model. Implementations are read-only after
/// construction and safe to call from several threads at once.
pub trait ImageClassifier: Send + Sync {
    /// Run one forward pass and return the raw per-label probabilities in
    /// model output order.
    fn classify(&self, input: &ImageTensor) -> Result<Vec<f32>, InferenceError>;

    /// Side length of the square input the model expects.
    fn input_size(&self) -> u32;

    /// Human-readable origin, e.g. the model file path.
    fn describe(&self) -> String;
}
