//! Entity types of the territorial unit hierarchy.
//!
//! The hierarchy is a strict four level tree:
//! region → district → municipality → cadastral territory.
//! Each level owns its children, so a child can never belong to two parents.
//!
//! In the source document every collection may be written either as a JSON
//! array or as a JSON object keyed by an arbitrary string (usually the id).
//! Both decode to a `Vec` in document order; object keys are dropped.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserializer, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};

/// Numeric identifier of a territorial unit. Unique within its level only.
pub type UnitId = u32;

/// The four levels of the hierarchy, ordered from the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Region,
    District,
    Municipality,
    CadastralTerritory,
}

impl Level {
    /// All levels, top-down.
    pub const ALL: [Self; 4] = [
        Self::Region,
        Self::District,
        Self::Municipality,
        Self::CadastralTerritory,
    ];

    /// The tag used for this level in serialized output.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Region => "region",
            Self::District => "district",
            Self::Municipality => "municipality",
            Self::CadastralTerritory => "cadastral_territory",
        }
    }

    /// Name of the child collection owned by an entity of this level.
    pub const fn children_name(self) -> Option<&'static str> {
        match self {
            Self::Region => Some("districts"),
            Self::District => Some("municipalities"),
            Self::Municipality => Some("cadastral_territories"),
            Self::CadastralTerritory => None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Root of the dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyData {
    #[serde(deserialize_with = "ordered_collection")]
    pub regions: Vec<Region>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub id: UnitId,
    #[serde(deserialize_with = "ordered_collection")]
    pub districts: Vec<District>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct District {
    pub name: String,
    pub id: UnitId,
    #[serde(deserialize_with = "ordered_collection")]
    pub municipalities: Vec<Municipality>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Municipality {
    pub name: String,
    pub id: UnitId,
    #[serde(deserialize_with = "ordered_collection")]
    pub cadastral_territories: Vec<CadastralTerritory>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CadastralTerritory {
    pub name: String,
    pub id: UnitId,
}

/// Entity counts per level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DatasetSummary {
    pub regions: usize,
    pub districts: usize,
    pub municipalities: usize,
    pub cadastral_territories: usize,
}

impl DatasetSummary {
    pub const fn total(&self) -> usize {
        self.regions + self.districts + self.municipalities + self.cadastral_territories
    }

    pub const fn count(&self, level: Level) -> usize {
        match level {
            Level::Region => self.regions,
            Level::District => self.districts,
            Level::Municipality => self.municipalities,
            Level::CadastralTerritory => self.cadastral_territories,
        }
    }
}

impl fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} regions, {} districts, {} municipalities, {} cadastral territories",
            self.regions, self.districts, self.municipalities, self.cadastral_territories
        )
    }
}

/// A container in the dataset that has no children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyCollection {
    /// Level of the entity owning the empty collection. For the root
    /// collection of regions this is `None`.
    pub owner_level: Option<Level>,
    pub owner_name: Option<String>,
    pub owner_id: Option<UnitId>,
}

impl fmt::Display for EmptyCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.owner_level, &self.owner_name, self.owner_id) {
            (Some(level), Some(name), Some(id)) => write!(
                f,
                "{level} '{name}' ({id}) has no {}",
                level.children_name().unwrap_or("children")
            ),
            _ => f.write_str("dataset has no regions"),
        }
    }
}

impl EmptyCollection {
    fn owned_by(level: Level, name: &str, id: UnitId) -> Self {
        Self {
            owner_level: Some(level),
            owner_name: Some(name.to_owned()),
            owner_id: Some(id),
        }
    }
}

impl HierarchyData {
    pub fn summary(&self) -> DatasetSummary {
        let mut summary = DatasetSummary {
            regions: self.regions.len(),
            ..DatasetSummary::default()
        };
        for region in &self.regions {
            summary.districts += region.districts.len();
            for district in &region.districts {
                summary.municipalities += district.municipalities.len();
                for municipality in &district.municipalities {
                    summary.cadastral_territories += municipality.cadastral_territories.len();
                }
            }
        }
        summary
    }

    /// Every container without children, in dataset order.
    pub fn empty_collections(&self) -> Vec<EmptyCollection> {
        let mut empty = Vec::new();
        if self.regions.is_empty() {
            empty.push(EmptyCollection {
                owner_level: None,
                owner_name: None,
                owner_id: None,
            });
        }
        for region in &self.regions {
            if region.districts.is_empty() {
                empty.push(EmptyCollection::owned_by(Level::Region, &region.name, region.id));
            }
            for district in &region.districts {
                if district.municipalities.is_empty() {
                    empty.push(EmptyCollection::owned_by(
                        Level::District,
                        &district.name,
                        district.id,
                    ));
                }
                for municipality in &district.municipalities {
                    if municipality.cadastral_territories.is_empty() {
                        empty.push(EmptyCollection::owned_by(
                            Level::Municipality,
                            &municipality.name,
                            municipality.id,
                        ));
                    }
                }
            }
        }
        empty
    }
}

/// Accepts a JSON array or a JSON object and yields the values in document order.
fn ordered_collection<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    struct OrderedCollection<T>(PhantomData<T>);

    impl<'de, T: Deserialize<'de>> Visitor<'de> for OrderedCollection<T> {
        type Value = Vec<T>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an array or a keyed object of territorial units")
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
            while let Some(item) = seq.next_element()? {
                items.push(item);
            }
            Ok(items)
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut items = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((_key, item)) = map.next_entry::<serde::de::IgnoredAny, T>()? {
                items.push(item);
            }
            Ok(items)
        }
    }

    deserializer.deserialize_any(OrderedCollection(PhantomData))
}
