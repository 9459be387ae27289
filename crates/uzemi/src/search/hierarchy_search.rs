use rayon::prelude::*;
use tracing::{debug, instrument};
use uzemi_data_processing::{HierarchyData, Level, UnitId};

use super::result::{Match, MatchId, Parents, SearchResult};
use crate::normalize::Normalizer;

/// Controls which levels are collected and how names are compared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Levels whose matches are collected. Traversal always descends through
    /// every level so ancestor names stay correct.
    pub levels: Vec<Level>,
    pub normalizer: Normalizer,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            levels: Level::ALL.to_vec(),
            normalizer: Normalizer::default(),
        }
    }
}

impl SearchConfig {
    pub fn builder() -> crate::config::SearchConfigBuilder {
        crate::config::SearchConfigBuilder::new()
    }

    pub fn includes(&self, level: Level) -> bool {
        self.levels.contains(&level)
    }
}

/// Names of the entities currently being visited above the cursor.
#[derive(Debug, Default)]
struct AncestorContext<'a> {
    region: Option<&'a str>,
    district: Option<&'a str>,
    municipality: Option<&'a str>,
}

impl AncestorContext<'_> {
    /// Ancestors strictly above `level`.
    fn parents_of(&self, level: Level) -> Parents {
        let above = |ancestor: Level, name: Option<&str>| {
            (ancestor < level).then(|| name.map(str::to_owned)).flatten()
        };
        Parents {
            region: above(Level::Region, self.region),
            district: above(Level::District, self.district),
            municipality: above(Level::Municipality, self.municipality),
        }
    }
}

struct Collector<'c> {
    config: &'c SearchConfig,
    needle: String,
    result: SearchResult,
}

impl Collector<'_> {
    fn visit(&mut self, level: Level, name: &str, id: MatchId, context: &AncestorContext<'_>) {
        if !self.config.includes(level) || !self.config.normalizer.contains(name, &self.needle) {
            return;
        }
        self.result.matches_mut(level).push(Match {
            level,
            name: name.to_owned(),
            id,
            parents: context.parents_of(level),
        });
    }

    fn visit_unit(&mut self, level: Level, name: &str, id: UnitId, context: &AncestorContext<'_>) {
        self.visit(level, name, MatchId::Unit(id), context);
    }
}

/// Walk the whole hierarchy once and collect every unit whose normalized name
/// contains the normalized term.
///
/// An empty term matches every unit.
#[instrument(name = "Hierarchy Search", level = "debug", skip(data, config))]
pub fn hierarchy_search_inner(
    term: &str,
    data: &HierarchyData,
    config: &SearchConfig,
) -> SearchResult {
    let mut collector = Collector {
        config,
        needle: config.normalizer.normalize(term),
        result: SearchResult::empty(term),
    };
    let mut context = AncestorContext::default();

    for region in &data.regions {
        let region_id = MatchId::Name(region.name.clone());
        collector.visit(Level::Region, &region.name, region_id, &context);
        context.region = Some(&region.name);

        for district in &region.districts {
            collector.visit_unit(Level::District, &district.name, district.id, &context);
            context.district = Some(&district.name);

            for municipality in &district.municipalities {
                collector.visit_unit(
                    Level::Municipality,
                    &municipality.name,
                    municipality.id,
                    &context,
                );
                context.municipality = Some(&municipality.name);

                for territory in &municipality.cadastral_territories {
                    collector.visit_unit(
                        Level::CadastralTerritory,
                        &territory.name,
                        territory.id,
                        &context,
                    );
                }
            }
        }
    }

    let result = collector.result;
    debug!(matches = result.total_matches(), "Search complete");
    result
}

/// Run independent searches in parallel. Output order follows `terms`.
#[instrument(name = "Bulk Hierarchy Search", level = "info", skip_all, fields(terms = terms.len()))]
pub fn bulk_hierarchy_search_inner(
    terms: &[&str],
    data: &HierarchyData,
    config: &SearchConfig,
) -> Vec<SearchResult> {
    terms
        .par_iter()
        .map(|term| hierarchy_search_inner(term, data, config))
        .collect()
}
