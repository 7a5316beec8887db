pub mod disposal;
pub mod label;
pub mod prediction;

pub use disposal::{record_or_empty, DisposalCatalog, DisposalRecord};
pub use label::{biodegradability, Biodegradability, WasteLabel};
pub use prediction::{rank, PredictionResult, RankedPrediction};
