use uzemi_data_processing::Level;

use crate::{error::UzemiError, normalize::Normalizer, search::SearchConfig};

/// Builder for creating search configurations with ergonomic defaults
#[derive(Debug, Clone, Default)]
pub struct SearchConfigBuilder {
    config: SearchConfig,
}

impl SearchConfigBuilder {
    /// Create a new builder: all levels, case- and accent-insensitive
    pub fn new() -> Self {
        Self {
            config: SearchConfig::default(),
        }
    }

    /// Create a builder that compares names exactly as written
    pub fn strict() -> Self {
        let mut builder = Self::new();
        builder.config.normalizer = Normalizer::IDENTITY;
        builder
    }

    /// Create a builder collecting only municipalities and cadastral territories
    pub fn settlements() -> Self {
        let mut builder = Self::new();
        builder.config.levels = vec![Level::Municipality, Level::CadastralTerritory];
        builder
    }

    /// Distinguish upper and lower case
    pub fn case_sensitive(mut self, sensitive: bool) -> Self {
        self.config.normalizer.fold_case = !sensitive;
        self
    }

    /// Distinguish accented and unaccented letters
    pub fn accent_sensitive(mut self, sensitive: bool) -> Self {
        self.config.normalizer.strip_diacritics = !sensitive;
        self
    }

    /// Collect matches only at the given levels.
    pub fn levels(mut self, levels: &[Level]) -> Result<Self, UzemiError> {
        if levels.is_empty() {
            return Err(UzemiError::ConfigError(
                "At least one level must be searched".to_string(),
            ));
        }

        let mut levels = levels.to_vec();
        levels.sort_unstable();
        levels.dedup();
        self.config.levels = levels;
        Ok(self)
    }

    /// Add a level to the collected set
    pub fn include_level(mut self, level: Level) -> Self {
        if !self.config.includes(level) {
            self.config.levels.push(level);
            self.config.levels.sort_unstable();
        }
        self
    }

    /// Build the final configuration
    pub fn build(self) -> SearchConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_builder() {
        let config = SearchConfigBuilder::new().build();
        assert_eq!(config, SearchConfig::default());
        assert_eq!(config.levels, Level::ALL.to_vec());
        assert!(config.normalizer.fold_case);
        assert!(config.normalizer.strip_diacritics);
    }

    #[test]
    fn test_strict_preset() {
        let config = SearchConfigBuilder::strict().build();
        assert_eq!(config.normalizer, Normalizer::IDENTITY);
        assert_eq!(config.levels.len(), 4);
    }

    #[test]
    fn test_settlements_preset() {
        let config = SearchConfigBuilder::settlements().build();
        assert!(!config.includes(Level::Region));
        assert!(!config.includes(Level::District));
        assert!(config.includes(Level::Municipality));
        assert!(config.includes(Level::CadastralTerritory));
    }

    #[test]
    fn test_method_chaining() {
        let config = SearchConfigBuilder::new()
            .case_sensitive(true)
            .accent_sensitive(false)
            .levels(&[Level::District])
            .unwrap()
            .include_level(Level::Region)
            .build();

        assert!(!config.normalizer.fold_case);
        assert!(config.normalizer.strip_diacritics);
        assert_eq!(config.levels, vec![Level::Region, Level::District]);
    }

    #[test]
    fn test_levels_are_sorted_and_deduplicated() {
        let config = SearchConfigBuilder::new()
            .levels(&[Level::CadastralTerritory, Level::Region, Level::CadastralTerritory])
            .unwrap()
            .build();
        assert_eq!(config.levels, vec![Level::Region, Level::CadastralTerritory]);
    }

    #[test]
    fn test_empty_levels_rejected() {
        let result = SearchConfigBuilder::new().levels(&[]);
        assert!(matches!(result, Err(UzemiError::ConfigError(_))));
    }

    #[test]
    fn test_include_level_is_idempotent() {
        let config = SearchConfigBuilder::settlements()
            .include_level(Level::Municipality)
            .build();
        assert_eq!(
            config.levels,
            vec![Level::Municipality, Level::CadastralTerritory]
        );
    }

    #[test]
    fn test_builder_from_search_config() {
        let config = SearchConfig::builder().accent_sensitive(true).build();
        assert!(!config.normalizer.strip_diacritics);
        assert!(config.normalizer.fold_case);
    }
}
