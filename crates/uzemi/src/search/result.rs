use serde::Serialize;
use uzemi_data_processing::{Level, UnitId};

/// Identifier carried by a [`Match`].
///
/// Region matches are keyed by the region name rather than its numeric id, a
/// quirk of the established output format that consumers rely on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum MatchId {
    Name(String),
    Unit(UnitId),
}

impl From<UnitId> for MatchId {
    fn from(id: UnitId) -> Self {
        Self::Unit(id)
    }
}

/// Names of the ancestors of a match, one entry per level above it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Parents {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub municipality: Option<String>,
}

impl Parents {
    pub fn get(&self, level: Level) -> Option<&str> {
        match level {
            Level::Region => self.region.as_deref(),
            Level::District => self.district.as_deref(),
            Level::Municipality => self.municipality.as_deref(),
            Level::CadastralTerritory => None,
        }
    }

    /// Levels present, top-down.
    pub fn levels(&self) -> Vec<Level> {
        Level::ALL
            .into_iter()
            .filter(|level| self.get(*level).is_some())
            .collect()
    }

    pub const fn is_empty(&self) -> bool {
        self.region.is_none() && self.district.is_none() && self.municipality.is_none()
    }
}

/// One search hit at a single level of the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Match {
    #[serde(rename = "type")]
    pub level: Level,
    pub name: String,
    pub id: MatchId,
    pub parents: Parents,
}

/// All matches of one query, grouped by level in dataset order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// The term exactly as supplied by the caller
    #[serde(rename = "searchTerm")]
    pub search_term: String,
    pub regions: Vec<Match>,
    pub districts: Vec<Match>,
    pub municipalities: Vec<Match>,
    pub cadastral_territories: Vec<Match>,
}

impl SearchResult {
    pub fn empty(search_term: impl Into<String>) -> Self {
        Self {
            search_term: search_term.into(),
            regions: Vec::new(),
            districts: Vec::new(),
            municipalities: Vec::new(),
            cadastral_territories: Vec::new(),
        }
    }

    pub fn matches(&self, level: Level) -> &[Match] {
        match level {
            Level::Region => &self.regions,
            Level::District => &self.districts,
            Level::Municipality => &self.municipalities,
            Level::CadastralTerritory => &self.cadastral_territories,
        }
    }

    pub(crate) fn matches_mut(&mut self, level: Level) -> &mut Vec<Match> {
        match level {
            Level::Region => &mut self.regions,
            Level::District => &mut self.districts,
            Level::Municipality => &mut self.municipalities,
            Level::CadastralTerritory => &mut self.cadastral_territories,
        }
    }

    /// Every match, regions first, each level in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = &Match> {
        itertools::chain!(
            &self.regions,
            &self.districts,
            &self.municipalities,
            &self.cadastral_territories
        )
    }

    pub fn total_matches(&self) -> usize {
        Level::ALL
            .into_iter()
            .map(|level| self.matches(level).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_matches() == 0
    }
}
