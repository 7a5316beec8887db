use serde::{Deserialize, Serialize};
use std::fmt;

/// Waste category predicted by the model.
///
/// Declaration order is the model's output order: index `i` of the
/// probability vector belongs to `WasteLabel::ALL[i]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WasteLabel {
    Cardboard,
    Glass,
    Metal,
    Paper,
    Plastic,
    Trash,
}

impl WasteLabel {
    pub const ALL: [WasteLabel; 6] = [
        WasteLabel::Cardboard,
        WasteLabel::Glass,
        WasteLabel::Metal,
        WasteLabel::Paper,
        WasteLabel::Plastic,
        WasteLabel::Trash,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub fn as_str(&self) -> &'static str {
        match self {
            WasteLabel::Cardboard => "cardboard",
            WasteLabel::Glass => "glass",
            WasteLabel::Metal => "metal",
            WasteLabel::Paper => "paper",
            WasteLabel::Plastic => "plastic",
            WasteLabel::Trash => "trash",
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn biodegradability(&self) -> Biodegradability {
        match self {
            WasteLabel::Cardboard | WasteLabel::Paper => Biodegradability::Biodegradable,
            WasteLabel::Glass | WasteLabel::Metal | WasteLabel::Plastic | WasteLabel::Trash => {
                Biodegradability::NonBiodegradable
            }
        }
    }
}

impl fmt::Display for WasteLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for WasteLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|label| label.as_str() == wanted)
            .ok_or_else(|| format!("Unknown waste label: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Biodegradability {
    Biodegradable,
    #[serde(rename = "Non-Biodegradable")]
    NonBiodegradable,
    Unknown,
}

/// Classify any label string; unknown labels are `Unknown`.
pub fn biodegradability(label: &str) -> Biodegradability {
    label
        .parse::<WasteLabel>()
        .map(|l| l.biodegradability())
        .unwrap_or(Biodegradability::Unknown)
}
