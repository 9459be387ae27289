use once_cell::sync::Lazy;

use super::error::Result;
use crate::model::{DatasetSummary, HierarchyData};

// Embedded dataset compiled into the binary
const EMBEDDED_UNITS: &str = include_str!("czech_units_sample.json");

/// Metadata describing the dataset that ships with the library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbeddedMetadata {
    pub version: String,
    pub source: String,
    pub description: String,
    pub summary: DatasetSummary,
}

/// Computed on first access by decoding the embedded document once.
pub static METADATA: Lazy<EmbeddedMetadata> = Lazy::new(|| EmbeddedMetadata {
    version: env!("CARGO_PKG_VERSION").to_string(),
    source: "czech_units_sample.json".to_string(),
    description: "Sample of Czech regions, districts, municipalities and cadastral territories"
        .to_string(),
    summary: load_embedded_data()
        .map(|data| data.summary())
        .unwrap_or_default(),
});

/// Load embedded dataset that ships with the library
///
/// The document keys every collection by unit id, the same layout as the full
/// national dataset.
pub fn load_embedded_data() -> Result<HierarchyData> {
    tracing::debug!("Loading embedded dataset from built-in data");
    Ok(serde_json::from_str(EMBEDDED_UNITS)?)
}
