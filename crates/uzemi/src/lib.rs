//! Uzemi - Czech Territorial Unit Search
//!
//! Uzemi answers two questions about the Czech administrative hierarchy of
//! regions (kraje), districts (okresy), municipalities (obce) and cadastral
//! territories (katastrální území):
//!
//! - which units have a name containing a given text, ignoring case and accents;
//! - what is a random complete path from a region down to a cadastral territory.
//!
//! # Quick Start
//!
//! ```rust
//! use uzemi::UnitSearcher;
//!
//! // Create a searcher using embedded data
//! let searcher = UnitSearcher::new_embedded()?;
//!
//! // Accent- and case-insensitive substring search
//! let result = searcher.search("ricany");
//! if let Some(municipality) = result.municipalities.first() {
//!     println!(
//!         "Found: {} (district {})",
//!         municipality.name,
//!         municipality.parents.district.as_deref().unwrap_or("?")
//!     );
//! }
//!
//! // Random region / district / municipality / cadastral territory
//! let path = searcher.random_hierarchy()?;
//! println!("{} > {}", path.municipality.name, path.cadastral_territory.name);
//! # Ok::<(), uzemi::error::UzemiError>(())
//! ```
//!
//! # Data
//!
//! A sample of the national dataset ships with the library. A complete dataset
//! in the same JSON layout can be loaded with [`DataSource::File`] or through
//! the `UZEMI_DATA_PATH` environment variable and [`DataSource::Env`].
use once_cell::sync::OnceCell;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

mod config;
mod core;
pub mod error;
pub mod normalize;
mod sample;
mod search;

pub use core::{SearchResults, SearcherInfo, UnitSearcher, UnitSearcherBuilder};

pub use config::SearchConfigBuilder;
pub use normalize::{Normalizer, normalize};
pub use sample::{RandomHierarchy, SampleError, UnitRef, sample_hierarchy};
pub use search::{
    Match, MatchId, Parents, SearchConfig, SearchResult, bulk_hierarchy_search_inner,
    hierarchy_search_inner,
};
pub use uzemi_data_processing as data_processing;
pub use uzemi_data_processing::{
    CadastralTerritory, DataSource, DatasetSummary, District, HierarchyData, Level, Municipality,
    Region, UnitId,
};

static LOGGER_INIT: OnceCell<()> = OnceCell::new();

/// Initialize logging for the Uzemi library.
///
/// Sets up a `tracing` subscriber that honours `RUST_LOG` and otherwise uses
/// `level`. Only the first call installs a subscriber; later calls are no-ops.
///
/// # Examples
///
/// ```rust
/// use tracing::Level;
/// use uzemi::init_logging;
///
/// init_logging(Level::INFO)?;
/// # Ok::<(), uzemi::error::UzemiError>(())
/// ```
pub fn init_logging(level: impl Into<LevelFilter>) -> Result<&'static (), error::UzemiError> {
    LOGGER_INIT.get_or_try_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level.into().to_string()))?
            .add_directive("rayon_core=warn".parse()?);

        tracing_subscriber::fmt::fmt()
            .with_env_filter(filter)
            .with_span_events(FmtSpan::CLOSE)
            .init();
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test_env() {
        let _ = init_logging(tracing::Level::WARN);
    }

    #[test]
    fn test_searcher_creation() {
        setup_test_env();

        let searcher = UnitSearcher::new_embedded();
        assert!(
            searcher.is_ok(),
            "Should be able to create searcher with embedded data"
        );
    }

    #[test]
    fn test_basic_search() {
        setup_test_env();

        let searcher = UnitSearcher::new_embedded().unwrap();
        for term in ["Praha", "Brno", "Ostrava", "Znojmo"] {
            let result = searcher.search(term);
            assert!(!result.is_empty(), "Search for '{term}' should find units");
        }
    }

    #[test]
    fn test_init_logging_is_idempotent() {
        setup_test_env();
        assert!(init_logging(tracing::Level::DEBUG).is_ok());
    }

    #[test]
    fn test_configuration() {
        setup_test_env();

        let config = SearchConfigBuilder::strict().build();
        let searcher = UnitSearcher::new_embedded().unwrap();

        assert!(searcher.search_with_config("brno", &config).is_empty());
        assert!(!searcher.search_with_config("Brno", &config).is_empty());
    }

    #[test]
    fn test_random_hierarchy() {
        setup_test_env();

        let searcher = UnitSearcher::new_embedded().unwrap();
        let path = searcher.random_hierarchy().expect("Sampling should work");
        let result = searcher.search(&path.cadastral_territory.name);
        assert!(
            result
                .cadastral_territories
                .iter()
                .any(|m| m.id == MatchId::Unit(path.cadastral_territory.id))
        );
    }
}
