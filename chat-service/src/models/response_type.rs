use serde::{Deserialize, Serialize};

/// Reply length class. `/chat` always answers `Brief`; the other variants are
/// produced by the intent diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseType {
    Brief,
    Moderate,
    Detailed,
}
