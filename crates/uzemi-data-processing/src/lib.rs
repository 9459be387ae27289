use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use itertools::Itertools;
use tracing::{info, instrument, warn};

pub mod embedded;
mod error;
pub mod model;
pub mod test_data;

pub use error::{DataError, Result};
pub use model::{
    CadastralTerritory, DatasetSummary, District, EmptyCollection, HierarchyData, Level,
    Municipality, Region, UnitId,
};
pub use test_data::{TestDataConfig, create_test_data, create_test_hierarchy};

/// Environment variable naming a JSON dataset on disk.
pub const DATA_PATH_ENV: &str = "UZEMI_DATA_PATH";

/// Where the hierarchy document comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DataSource {
    /// Sample dataset compiled into the library
    #[default]
    Embedded,
    /// JSON document on disk
    File(PathBuf),
    /// Path read from `UZEMI_DATA_PATH`, embedded data when unset
    Env,
}

impl DataSource {
    /// Resolve `Env` to a concrete source.
    pub fn resolve(&self) -> Self {
        match self {
            Self::Env => match std::env::var_os(DATA_PATH_ENV) {
                Some(path) => Self::File(PathBuf::from(path)),
                None => {
                    warn!(
                        env = DATA_PATH_ENV,
                        "Data path not set, falling back to embedded dataset"
                    );
                    Self::Embedded
                }
            },
            other => other.clone(),
        }
    }
}

/// Load the hierarchy from the given source.
#[instrument(name = "Load hierarchy data", level = "info")]
pub fn load(source: &DataSource) -> Result<HierarchyData> {
    let t_load = std::time::Instant::now();

    let data = match source.resolve() {
        DataSource::File(path) => HierarchyData::from_path(path)?,
        DataSource::Embedded | DataSource::Env => embedded::load_embedded_data()?,
    };

    let summary = data.summary();
    info!(
        elapsed = ?t_load.elapsed(),
        regions = summary.regions,
        districts = summary.districts,
        municipalities = summary.municipalities,
        cadastral_territories = summary.cadastral_territories,
        "Hierarchy data loaded"
    );

    let empty = data.empty_collections();
    if !empty.is_empty() {
        warn!(
            count = empty.len(),
            "Dataset has empty containers, sampling through them will fail: {}",
            empty.iter().join("; ")
        );
    }

    Ok(data)
}

impl HierarchyData {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!(path = ?path, "Reading hierarchy document");
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}
