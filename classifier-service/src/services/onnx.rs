//! ONNX-backed classifier running on tract.

use super::classifier::{ImageClassifier, InferenceError};
use super::preprocess::ImageTensor;
use crate::models::WasteLabel;
use std::path::{Path, PathBuf};
use tract_onnx::prelude::*;

pub struct OnnxClassifier {
    model: TypedRunnableModel<TypedModel>,
    path: PathBuf,
    input_size: u32,
}

impl OnnxClassifier {
    /// Load, pin the input to `[1, size, size, 3]` f32 and optimize.
    pub fn load(path: &Path, input_size: u32) -> Result<Self, InferenceError> {
        let side = input_size as usize;

        let model = tract_onnx::onnx()
            .model_for_path(path)
            .and_then(|m| m.with_input_fact(0, f32::fact([1, side, side, 3]).into()))
            .and_then(|m| m.into_optimized())
            .map_err(|e| {
                InferenceError::Model(format!("failed to load {}: {}", path.display(), e))
            })?;

        match model.output_fact(0).map(|fact| fact.shape.last().cloned()) {
            Ok(Some(width)) if width != TDim::from(WasteLabel::COUNT as i64) => {
                tracing::warn!(
                    path = %path.display(),
                    output_width = %width,
                    expected = WasteLabel::COUNT,
                    "Model output width does not match the label set"
                );
            }
            Ok(_) => {}
            Err(e) => tracing::warn!(error = %e, "Could not inspect model output shape"),
        }

        let model = model.into_runnable().map_err(|e| {
            InferenceError::Model(format!("failed to prepare {}: {}", path.display(), e))
        })?;

        Ok(Self {
            model,
            path: path.to_path_buf(),
            input_size,
        })
    }
}

impl ImageClassifier for OnnxClassifier {
    fn classify(&self, input: &ImageTensor) -> Result<Vec<f32>, InferenceError> {
        if input.size() != self.input_size {
            return Err(InferenceError::Model(format!(
                "input is {}px, model expects {}px",
                input.size(),
                self.input_size
            )));
        }

        let tensor = Tensor::from_shape(&input.shape(), input.data())
            .map_err(|e| InferenceError::Model(format!("failed to shape input tensor: {}", e)))?;

        let outputs = self
            .model
            .run(tvec!(tensor.into()))
            .map_err(|e| InferenceError::Model(e.to_string()))?;

        let first = outputs
            .first()
            .ok_or_else(|| InferenceError::InvalidOutput("model produced no outputs".to_string()))?;

        let view = first
            .to_array_view::<f32>()
            .map_err(|e| InferenceError::InvalidOutput(format!("output is not f32: {}", e)))?;

        Ok(view.iter().copied().collect())
    }

    fn input_size(&self) -> u32 {
        self.input_size
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
