use super::disposal::{record_or_empty, DisposalCatalog, DisposalRecord};
use super::label::{Biodegradability, WasteLabel};
use crate::services::InferenceError;
use serde::Serialize;

/// One entry of the ranked probability vector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPrediction {
    #[serde(rename = "class")]
    pub label: WasteLabel,
    pub confidence: f32,
    #[serde(rename = "biodegradable")]
    pub biodegradability: Biodegradability,
}

/// Response body of `POST /predict`.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionResult {
    #[serde(rename = "predicted_class")]
    pub label: WasteLabel,
    pub biodegradability: Biodegradability,
    pub confidence: f32,
    #[serde(serialize_with = "record_or_empty")]
    pub disposal_info: Option<DisposalRecord>,
    #[serde(rename = "all_predictions")]
    pub ranked: Vec<RankedPrediction>,
}

impl PredictionResult {
    /// Build the result from the model's raw output vector.
    ///
    /// The vector must hold exactly one finite probability in `[0, 1]` per
    /// label. The top prediction is the first maximum, which is also the head
    /// of the ranking since the sort is stable.
    pub fn from_probabilities(
        probabilities: &[f32],
        catalog: &DisposalCatalog,
    ) -> Result<Self, InferenceError> {
        let ranked = rank(probabilities)?;
        let top = ranked[0].clone();

        Ok(Self {
            label: top.label,
            biodegradability: top.biodegradability,
            confidence: top.confidence,
            disposal_info: catalog.record(top.label).cloned(),
            ranked,
        })
    }
}

/// Pair each probability with its label and sort descending by confidence.
/// Ties keep label order.
pub fn rank(probabilities: &[f32]) -> Result<Vec<RankedPrediction>, InferenceError> {
    if probabilities.len() != WasteLabel::COUNT {
        return Err(InferenceError::InvalidOutput(format!(
            "model produced {} outputs, expected {}",
            probabilities.len(),
            WasteLabel::COUNT
        )));
    }

    if let Some((index, value)) = probabilities
        .iter()
        .enumerate()
        .find(|(_, p)| !p.is_finite() || **p < 0.0 || **p > 1.0)
    {
        return Err(InferenceError::InvalidOutput(format!(
            "output {} is not a probability: {}",
            index, value
        )));
    }

    let mut ranked: Vec<RankedPrediction> = WasteLabel::ALL
        .iter()
        .zip(probabilities)
        .map(|(label, &confidence)| RankedPrediction {
            label: *label,
            confidence,
            biodegradability: label.biodegradability(),
        })
        .collect();

    // Values are finite here, so total_cmp orders them like partial_cmp would.
    ranked.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));

    Ok(ranked)
}
