use std::io::Write;

use tempfile::NamedTempFile;
use tracing::info;

use super::error::Result;
use crate::model::{CadastralTerritory, District, HierarchyData, Municipality, Region, UnitId};

const ACCENTED_STEMS: [&str; 6] = ["Říčany", "Žďár", "Čáslav", "Ústí", "Třebíč", "Kněžice"];

/// Configuration for synthetic hierarchy generation.
///
/// Every entity at a level gets the same number of children, so the generated
/// hierarchy has uniform fan-out.
#[derive(Debug, Clone)]
pub struct TestDataConfig {
    pub regions: usize,
    pub districts_per_region: usize,
    pub municipalities_per_district: usize,
    pub territories_per_municipality: usize,
    /// Use accented Czech stems for municipality and territory names
    pub accented_names: bool,
    /// Write collections as objects keyed by id instead of arrays
    pub keyed_collections: bool,
}

impl Default for TestDataConfig {
    fn default() -> Self {
        Self {
            regions: 4,
            districts_per_region: 3,
            municipalities_per_district: 3,
            territories_per_municipality: 2,
            accented_names: true,
            keyed_collections: true,
        }
    }
}

impl TestDataConfig {
    /// Minimal data for unit tests
    pub fn minimal() -> Self {
        Self {
            regions: 1,
            districts_per_region: 1,
            municipalities_per_district: 1,
            territories_per_municipality: 1,
            accented_names: false,
            keyed_collections: false,
        }
    }

    /// Sample data for integration tests
    pub fn sample() -> Self {
        Self {
            regions: 6,
            districts_per_region: 4,
            municipalities_per_district: 5,
            territories_per_municipality: 3,
            accented_names: true,
            keyed_collections: true,
        }
    }
}

/// Build a synthetic hierarchy in memory.
///
/// Ids are derived from the position in the tree: region `r` has id `r`,
/// its district `d` has id `r * 100 + d`, and so on, so ids stay unique per level.
pub fn create_test_hierarchy(config: &TestDataConfig) -> HierarchyData {
    let regions = (1..=config.regions)
        .map(|r| {
            let region_id = r as UnitId;
            Region {
                name: format!("Kraj {r}"),
                id: region_id,
                districts: (1..=config.districts_per_region)
                    .map(|d| {
                        let district_id = region_id * 100 + d as UnitId;
                        District {
                            name: format!("Okres {r}-{d}"),
                            id: district_id,
                            municipalities: (1..=config.municipalities_per_district)
                                .map(|m| {
                                    let municipality_id = district_id * 100 + m as UnitId;
                                    Municipality {
                                        name: unit_name(config, m, &format!("{r}-{d}-{m}")),
                                        id: municipality_id,
                                        cadastral_territories: (1..=config
                                            .territories_per_municipality)
                                            .map(|t| CadastralTerritory {
                                                name: unit_name(
                                                    config,
                                                    m + t,
                                                    &format!("{r}-{d}-{m}-{t}"),
                                                ),
                                                id: municipality_id * 100 + t as UnitId,
                                            })
                                            .collect(),
                                    }
                                })
                                .collect(),
                        }
                    })
                    .collect(),
            }
        })
        .collect();

    HierarchyData { regions }
}

fn unit_name(config: &TestDataConfig, position: usize, suffix: &str) -> String {
    if config.accented_names {
        let stem = ACCENTED_STEMS[position % ACCENTED_STEMS.len()];
        format!("{stem} {suffix}")
    } else {
        format!("Obec {suffix}")
    }
}

/// Create a synthetic hierarchy and write it as JSON to a temporary file.
pub fn create_test_data(config: &TestDataConfig) -> Result<NamedTempFile> {
    info!("Creating test data with config: {:?}", config);

    let data = create_test_hierarchy(config);
    let mut file = NamedTempFile::new()?;

    if config.keyed_collections {
        serde_json::to_writer(&mut file, &keyed_json(&data))?;
    } else {
        serde_json::to_writer(&mut file, &data)?;
    }

    file.flush()?;
    Ok(file)
}

/// Re-shape a hierarchy so every collection is an object keyed by id.
fn keyed_json(data: &HierarchyData) -> serde_json::Value {
    use serde_json::{Map, Value, json};

    let keyed = |entries: Vec<(UnitId, Value)>| -> Value {
        Value::Object(
            entries
                .into_iter()
                .map(|(id, value)| (id.to_string(), value))
                .collect::<Map<_, _>>(),
        )
    };

    let regions = data
        .regions
        .iter()
        .map(|region| {
            let districts = region
                .districts
                .iter()
                .map(|district| {
                    let municipalities = district
                        .municipalities
                        .iter()
                        .map(|municipality| {
                            let territories = municipality
                                .cadastral_territories
                                .iter()
                                .map(|t| (t.id, json!({ "name": t.name, "id": t.id })))
                                .collect();
                            (
                                municipality.id,
                                json!({
                                    "name": municipality.name,
                                    "id": municipality.id,
                                    "cadastral_territories": keyed(territories),
                                }),
                            )
                        })
                        .collect();
                    (
                        district.id,
                        json!({
                            "name": district.name,
                            "id": district.id,
                            "municipalities": keyed(municipalities),
                        }),
                    )
                })
                .collect();
            (
                region.id,
                json!({ "name": region.name, "id": region.id, "districts": keyed(districts) }),
            )
        })
        .collect();

    json!({ "regions": keyed(regions) })
}
