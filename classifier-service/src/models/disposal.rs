//! Static disposal guidance per waste label.

use super::label::{Biodegradability, WasteLabel};
use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisposalRecord {
    pub biodegradable: bool,
    #[serde(rename = "recycling_info")]
    pub recycling_advice: String,
    pub decomposition_time: String,
}

impl DisposalRecord {
    fn new(biodegradable: bool, recycling_advice: &str, decomposition_time: &str) -> Self {
        Self {
            biodegradable,
            recycling_advice: recycling_advice.to_string(),
            decomposition_time: decomposition_time.to_string(),
        }
    }
}

/// Read-only label → disposal record table. Built once at startup and shared
/// by every request.
#[derive(Debug, Clone)]
pub struct DisposalCatalog {
    records: HashMap<WasteLabel, DisposalRecord>,
}

impl DisposalCatalog {
    pub fn new(records: HashMap<WasteLabel, DisposalRecord>) -> Self {
        Self { records }
    }

    /// The guidance shipped with the service.
    pub fn standard() -> Self {
        let records = HashMap::from([
            (
                WasteLabel::Cardboard,
                DisposalRecord::new(
                    true,
                    "Recyclable - clean and flatten before recycling",
                    "2-3 months",
                ),
            ),
            (
                WasteLabel::Paper,
                DisposalRecord::new(true, "Recyclable - remove any plastic coating", "2-6 weeks"),
            ),
            (
                WasteLabel::Glass,
                DisposalRecord::new(
                    false,
                    "Highly recyclable - clean before recycling",
                    "1 million years",
                ),
            ),
            (
                WasteLabel::Metal,
                DisposalRecord::new(false, "Recyclable - clean cans and containers", "50-500 years"),
            ),
            (
                WasteLabel::Plastic,
                DisposalRecord::new(
                    false,
                    "Check recycling number - not all plastics are recyclable",
                    "450-1000 years",
                ),
            ),
            (
                WasteLabel::Trash,
                DisposalRecord::new(
                    false,
                    "General waste - dispose in regular trash bin",
                    "Varies greatly",
                ),
            ),
        ]);

        Self::new(records)
    }

    pub fn record(&self, label: WasteLabel) -> Option<&DisposalRecord> {
        self.records.get(&label)
    }

    /// Look up by free-form label name, case-insensitively.
    pub fn disposal_info(&self, label: &str) -> Option<&DisposalRecord> {
        label
            .parse::<WasteLabel>()
            .ok()
            .and_then(|l| self.record(l))
    }

    pub fn labels_with(&self, wanted: Biodegradability) -> Vec<WasteLabel> {
        WasteLabel::ALL
            .iter()
            .copied()
            .filter(|l| self.records.contains_key(l) && l.biodegradability() == wanted)
            .collect()
    }
}

impl Default for DisposalCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Serialize a missing record as `{}` rather than `null`.
pub fn record_or_empty<S>(record: &Option<DisposalRecord>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match record {
        Some(record) => record.serialize(serializer),
        None => serializer.serialize_map(Some(0))?.end(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_label_has_a_record() {
        let catalog = DisposalCatalog::standard();
        for label in WasteLabel::ALL {
            let record = catalog
                .disposal_info(label.as_str())
                .unwrap_or_else(|| panic!("missing record for {label}"));
            assert!(!record.recycling_advice.is_empty());
            assert!(!record.decomposition_time.is_empty());
        }
    }

    #[test]
    fn record_flag_agrees_with_label_classification() {
        let catalog = DisposalCatalog::standard();
        for label in WasteLabel::ALL {
            let record = catalog.record(label).unwrap();
            assert_eq!(
                record.biodegradable,
                label.biodegradability() == Biodegradability::Biodegradable,
                "{label}"
            );
        }
    }

    #[test]
    fn unknown_label_has_no_record() {
        let catalog = DisposalCatalog::standard();
        assert!(catalog.disposal_info("styrofoam").is_none());
        assert!(catalog.disposal_info("").is_none());
    }

    #[test]
    fn lookup_ignores_case() {
        let catalog = DisposalCatalog::standard();
        assert_eq!(
            catalog.disposal_info("METAL").unwrap().decomposition_time,
            "50-500 years"
        );
    }

    #[test]
    fn missing_record_serializes_as_empty_object() {
        #[derive(Serialize)]
        struct Wrapper {
            #[serde(serialize_with = "record_or_empty")]
            disposal_info: Option<DisposalRecord>,
        }

        let json = serde_json::to_value(Wrapper {
            disposal_info: None,
        })
        .unwrap();
        assert_eq!(json["disposal_info"], serde_json::json!({}));

        let json = serde_json::to_value(Wrapper {
            disposal_info: DisposalCatalog::standard().disposal_info("paper").cloned(),
        })
        .unwrap();
        assert_eq!(
            json["disposal_info"]["recycling_info"],
            "Recyclable - remove any plastic coating"
        );
        assert_eq!(json["disposal_info"]["biodegradable"], true);
    }

    #[test]
    fn biodegradable_partition() {
        let catalog = DisposalCatalog::standard();
        assert_eq!(
            catalog.labels_with(Biodegradability::Biodegradable),
            vec![WasteLabel::Cardboard, WasteLabel::Paper]
        );
        assert_eq!(
            catalog.labels_with(Biodegradability::NonBiodegradable),
            vec![
                WasteLabel::Glass,
                WasteLabel::Metal,
                WasteLabel::Plastic,
                WasteLabel::Trash
            ]
        );
    }
}
