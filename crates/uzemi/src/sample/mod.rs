//! Random descent through the hierarchy.
//!
//! One region is drawn uniformly, then one of its districts uniformly, and so
//! on down to a cadastral territory. Each step is uniform over the children of
//! the previous pick, so the path is *not* uniform over all leaves when
//! fan-out differs between branches.

use rand::Rng;
use serde::Serialize;
use tracing::trace;
use uzemi_data_processing::{HierarchyData, Level, UnitId};

pub use error::SampleError;
use error::Result;

/// Name and numeric id of a sampled unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct UnitRef {
    pub name: String,
    pub id: UnitId,
}

impl UnitRef {
    fn new(name: &str, id: UnitId) -> Self {
        Self {
            name: name.to_owned(),
            id,
        }
    }
}

/// One complete path from a region down to a cadastral territory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RandomHierarchy {
    pub region: UnitRef,
    pub district: UnitRef,
    pub municipality: UnitRef,
    pub cadastral_territory: UnitRef,
}

impl RandomHierarchy {
    pub const fn get(&self, level: Level) -> &UnitRef {
        match level {
            Level::Region => &self.region,
            Level::District => &self.district,
            Level::Municipality => &self.municipality,
            Level::CadastralTerritory => &self.cadastral_territory,
        }
    }
}

fn random_element<'a, T, R>(
    items: &'a [T],
    rng: &mut R,
    level: Level,
    parent: Option<&UnitRef>,
) -> Result<&'a T>
where
    R: Rng + ?Sized,
{
    if items.is_empty() {
        return Err(SampleError::EmptyCollection {
            level,
            parent: parent.cloned(),
        });
    }
    Ok(&items[rng.random_range(0..items.len())])
}

/// Pick one unit per level, each uniformly among the children of the previous pick.
///
/// Fails if any collection on the way down is empty.
pub fn sample_hierarchy<R>(data: &HierarchyData, rng: &mut R) -> Result<RandomHierarchy>
where
    R: Rng + ?Sized,
{
    let region = random_element(&data.regions, rng, Level::Region, None)?;
    let region_ref = UnitRef::new(&region.name, region.id);

    let district = random_element(&region.districts, rng, Level::District, Some(&region_ref))?;
    let district_ref = UnitRef::new(&district.name, district.id);

    let municipality = random_element(
        &district.municipalities,
        rng,
        Level::Municipality,
        Some(&district_ref),
    )?;
    let municipality_ref = UnitRef::new(&municipality.name, municipality.id);

    let territory = random_element(
        &municipality.cadastral_territories,
        rng,
        Level::CadastralTerritory,
        Some(&municipality_ref),
    )?;

    let sampled = RandomHierarchy {
        region: region_ref,
        district: district_ref,
        municipality: municipality_ref,
        cadastral_territory: UnitRef::new(&territory.name, territory.id),
    };
    trace!(?sampled, "Sampled hierarchy");
    Ok(sampled)
}

mod error {
    use thiserror::Error;
    use uzemi_data_processing::Level;

    use super::UnitRef;

    #[derive(Error, Debug, Clone, PartialEq, Eq)]
    pub enum SampleError {
        #[error(
            "Cannot retrieve random {level}: collection under {} is empty",
            describe_parent(.parent.as_ref())
        )]
        EmptyCollection {
            level: Level,
            parent: Option<UnitRef>,
        },
    }
    pub type Result<T> = std::result::Result<T, SampleError>;

    fn describe_parent(parent: Option<&UnitRef>) -> String {
        parent.map_or_else(
            || "the dataset root".to_string(),
            |p| format!("'{}' ({})", p.name, p.id),
        )
    }
}
