//! The main entry point of the library.
//!
//! [`UnitSearcher`] owns the immutable hierarchy and exposes the two queries:
//! substring search across all levels and random sampling of one full path.
//!
//! ```rust
//! use uzemi::UnitSearcher;
//!
//! let searcher = UnitSearcher::new_embedded()?;
//!
//! let result = searcher.search("praha");
//! for district in &result.districts {
//!     println!("{} in {:?}", district.name, district.parents.region);
//! }
//!
//! let path = searcher.random_hierarchy()?;
//! println!("{} / {}", path.region.name, path.cadastral_territory.name);
//! # Ok::<(), uzemi::error::UzemiError>(())
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use itertools::Itertools;
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{info, instrument};
use uzemi_data_processing::{DataSource, DatasetSummary, HierarchyData, embedded::METADATA};

use crate::{
    error::UzemiError,
    sample::{RandomHierarchy, sample_hierarchy},
    search::{SearchConfig, SearchResult, bulk_hierarchy_search_inner, hierarchy_search_inner},
};

pub type SearchResults = Vec<SearchResult>;

/// Searches and samples a territorial unit hierarchy.
///
/// Cloning is cheap: clones share the same dataset.
///
/// # Examples
///
/// With custom configuration:
/// ```rust
/// use uzemi::{Level, SearchConfig, UnitSearcher};
///
/// let config = SearchConfig::builder()
///     .levels(&[Level::Municipality])?
///     .build();
///
/// let searcher = UnitSearcher::new_embedded()?;
/// let result = searcher.search_with_config("brno", &config);
/// assert!(result.districts.is_empty());
/// # Ok::<(), uzemi::error::UzemiError>(())
/// ```
#[derive(Debug, Clone)]
pub struct UnitSearcher {
    data: Arc<HierarchyData>,
    source: Option<DataSource>,
    rng: Option<Arc<Mutex<StdRng>>>,
}

impl UnitSearcher {
    /// Create a `UnitSearcher` using the dataset compiled into the library.
    #[instrument(name = "Create UnitSearcher with Embedded Data", level = "info")]
    pub fn new_embedded() -> Result<Self, UzemiError> {
        Self::from_source(&DataSource::Embedded)
    }

    /// Create a `UnitSearcher` from the given data source.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use uzemi::{DataSource, UnitSearcher};
    ///
    /// let searcher = UnitSearcher::from_source(&DataSource::File("units.json".into()))?;
    /// # Ok::<(), uzemi::error::UzemiError>(())
    /// ```
    #[instrument(name = "Create UnitSearcher", level = "info")]
    pub fn from_source(source: &DataSource) -> Result<Self, UzemiError> {
        let t_init = std::time::Instant::now();
        let source = source.resolve();
        let data = uzemi_data_processing::load(&source)?;
        let searcher = Self {
            source: Some(source),
            ..Self::from_data(data)
        };

        info!(
            elapsed_seconds = ?t_init.elapsed(),
            "UnitSearcher initialization complete"
        );
        Ok(searcher)
    }

    /// Wrap an already decoded hierarchy.
    pub fn from_data(data: HierarchyData) -> Self {
        Self {
            data: Arc::new(data),
            source: None,
            rng: None,
        }
    }

    pub fn builder() -> UnitSearcherBuilder {
        UnitSearcherBuilder::new()
    }

    /// Search every level for units whose name contains `term`.
    ///
    /// Matching ignores case and diacritics. An empty term matches every unit.
    pub fn search(&self, term: impl AsRef<str>) -> SearchResult {
        self.search_with_config(term, &SearchConfig::default())
    }

    pub fn search_with_config(
        &self,
        term: impl AsRef<str>,
        config: &SearchConfig,
    ) -> SearchResult {
        hierarchy_search_inner(term.as_ref(), &self.data, config)
    }

    /// Run several searches in parallel; results follow the input order.
    ///
    /// ```rust
    /// # use uzemi::UnitSearcher;
    /// # let searcher = UnitSearcher::new_embedded().unwrap();
    /// let results = searcher.search_bulk(&["Brno", "Opava", "Říčany"]);
    /// assert_eq!(results.len(), 3);
    /// ```
    pub fn search_bulk<Term>(&self, terms: &[Term]) -> SearchResults
    where
        Term: AsRef<str>,
    {
        self.search_bulk_with_config(terms, &SearchConfig::default())
    }

    pub fn search_bulk_with_config<Term>(
        &self,
        terms: &[Term],
        config: &SearchConfig,
    ) -> SearchResults
    where
        Term: AsRef<str>,
    {
        let terms = terms.iter().map(AsRef::as_ref).collect::<Vec<_>>();
        bulk_hierarchy_search_inner(&terms, &self.data, config)
    }

    /// Draw one region, then one of its districts, one of that district's
    /// municipalities and one of that municipality's cadastral territories.
    ///
    /// Uses the searcher's seeded generator when built with
    /// [`UnitSearcherBuilder::seed`], the thread-local generator otherwise.
    pub fn random_hierarchy(&self) -> Result<RandomHierarchy, UzemiError> {
        match &self.rng {
            Some(rng) => {
                let mut rng = rng.lock().unwrap_or_else(PoisonError::into_inner);
                self.random_hierarchy_with_rng(&mut *rng)
            }
            None => self.random_hierarchy_with_rng(&mut rand::rng()),
        }
    }

    /// Same as [`random_hierarchy`](Self::random_hierarchy) with a caller-supplied generator.
    pub fn random_hierarchy_with_rng<R>(
        &self,
        rng: &mut R,
    ) -> Result<RandomHierarchy, UzemiError>
    where
        R: Rng + ?Sized,
    {
        sample_hierarchy(&self.data, rng).map_err(From::from)
    }

    /// The whole dataset.
    pub fn units(&self) -> &HierarchyData {
        &self.data
    }

    /// Get information about the loaded dataset.
    pub fn info(&self) -> SearcherInfo {
        SearcherInfo {
            data_source: self.source.clone(),
            summary: self.data.summary(),
            seeded: self.rng.is_some(),
        }
    }
}

/// Information about a `UnitSearcher`'s dataset and state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearcherInfo {
    /// `None` when the searcher was built from an in-memory dataset
    pub data_source: Option<DataSource>,
    pub summary: DatasetSummary,
    pub seeded: bool,
}

impl SearcherInfo {
    /// Get a human-readable summary of the searcher.
    pub fn summary(&self) -> String {
        let flags = [
            self.is_embedded().then_some("embedded"),
            self.seeded.then_some("seeded"),
        ]
        .into_iter()
        .flatten()
        .join(", ");

        if flags.is_empty() {
            format!("UnitSearcher over {}", self.summary)
        } else {
            format!("UnitSearcher over {} ({flags})", self.summary)
        }
    }

    /// Check if the searcher is using embedded data.
    pub fn is_embedded(&self) -> bool {
        self.data_source == Some(DataSource::Embedded) && self.summary == METADATA.summary
    }

    pub const fn total_units(&self) -> usize {
        self.summary.total()
    }
}

/// Builder for creating `UnitSearcher` with custom configuration.
#[derive(Debug, Clone, Default)]
pub struct UnitSearcherBuilder {
    data_source: Option<DataSource>,
    data: Option<HierarchyData>,
    seed: Option<u64>,
}

impl UnitSearcherBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the dataset from this source. Ignored when [`data`](Self::data) is set.
    #[must_use]
    pub fn data_source(mut self, source: DataSource) -> Self {
        self.data_source = Some(source);
        self
    }

    /// Use an already decoded dataset.
    #[must_use]
    pub fn data(mut self, data: HierarchyData) -> Self {
        self.data = Some(data);
        self
    }

    /// Draw random hierarchies from a generator seeded with `seed`.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the `UnitSearcher`.
    pub fn build(self) -> Result<UnitSearcher, UzemiError> {
        let mut searcher = match self.data {
            Some(data) => UnitSearcher::from_data(data),
            None => UnitSearcher::from_source(&self.data_source.unwrap_or_default())?,
        };
        searcher.rng = self
            .seed
            .map(|seed| Arc::new(Mutex::new(StdRng::seed_from_u64(seed))));
        Ok(searcher)
    }
}

impl From<HierarchyData> for UnitSearcher {
    fn from(data: HierarchyData) -> Self {
        Self::from_data(data)
    }
}

#[cfg(test)]
mod tests {
    use uzemi_data_processing::{Level, TestDataConfig, create_test_data, create_test_hierarchy};

    use super::*;
    use crate::sample::SampleError;

    #[test]
    fn test_from_file_source() {
        let config = TestDataConfig::sample();
        let file = create_test_data(&config).unwrap();
        let searcher = UnitSearcher::from_source(&DataSource::File(file.path().to_path_buf()))
            .expect("Should load from file");
        assert_eq!(searcher.units(), &create_test_hierarchy(&config));
    }

    #[test]
    fn test_seeded_searchers_repeat() {
        let build = || {
            UnitSearcher::builder()
                .data(create_test_hierarchy(&TestDataConfig::sample()))
                .seed(11)
                .build()
                .unwrap()
        };
        let a = build();
        let b = build();
        for _ in 0..10 {
            assert_eq!(a.random_hierarchy().unwrap(), b.random_hierarchy().unwrap());
        }
        assert!(a.info().seeded);
    }

    #[test]
    fn test_clones_share_seeded_generator() {
        let searcher = UnitSearcher::builder()
            .data(create_test_hierarchy(&TestDataConfig::sample()))
            .seed(3)
            .build()
            .unwrap();
        let reference = UnitSearcher::builder()
            .data(create_test_hierarchy(&TestDataConfig::sample()))
            .seed(3)
            .build()
            .unwrap();

        let clone = searcher.clone();
        let first = searcher.random_hierarchy().unwrap();
        let second = clone.random_hierarchy().unwrap();
        assert_eq!(first, reference.random_hierarchy().unwrap());
        assert_eq!(second, reference.random_hierarchy().unwrap());
    }

    #[test]
    fn test_random_hierarchy_error_propagates() {
        let searcher = UnitSearcher::from_data(HierarchyData::default());
        let err = searcher.random_hierarchy().unwrap_err();
        assert!(matches!(
            err,
            UzemiError::Sample(SampleError::EmptyCollection {
                level: Level::Region,
                ..
            })
        ));
    }

    #[test]
    fn test_search_bulk_accepts_owned_terms() {
        let searcher = UnitSearcher::new_embedded().unwrap();
        let terms = vec!["Opava".to_string(), "Kuřim".to_string()];
        let results = searcher.search_bulk(&terms);
        assert_eq!(results[0].municipalities[0].name, "Opava");
        assert_eq!(results[1].municipalities[0].name, "Kuřim");
    }

    #[test]
    fn test_info_summary() {
        let searcher = UnitSearcher::new_embedded().unwrap();
        let info = searcher.info();
        assert!(info.is_embedded());
        assert_eq!(info.data_source, Some(DataSource::Embedded));
        assert!(!info.seeded);
        assert_eq!(info.total_units(), 78);
        assert_eq!(
            info.summary(),
            "UnitSearcher over 5 regions, 11 districts, 17 municipalities, 45 cadastral territories (embedded)"
        );

        let synthetic = UnitSearcher::from(create_test_hierarchy(&TestDataConfig::minimal()));
        assert_eq!(
            synthetic.info().summary(),
            "UnitSearcher over 1 regions, 1 districts, 1 municipalities, 1 cadastral territories"
        );
    }
}
