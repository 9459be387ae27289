//! Integration tests for Uzemi territorial unit search
//!
//! These tests run against the full public API using the embedded dataset and
//! verify search results, their JSON shape and random hierarchy sampling.

use serde_json::json;
use uzemi::{
    DataSource, Level, MatchId, SearchConfigBuilder, UnitSearcher,
    data_processing::{TestDataConfig, create_test_data},
};

fn setup_test_env() {
    let _ = uzemi::init_logging(tracing::Level::WARN);
}

fn searcher() -> UnitSearcher {
    setup_test_env();
    UnitSearcher::new_embedded().expect("Should create searcher")
}

#[test]
fn test_full_workflow() {
    let searcher = searcher();

    // 1. Basic search
    let result = searcher.search("Praha");
    assert!(!result.is_empty(), "Should find units for Praha");

    // 2. Search with configuration
    let config = SearchConfigBuilder::settlements().build();
    let limited = searcher.search_with_config("Praha", &config);
    assert!(limited.regions.is_empty());
    assert!(limited.districts.is_empty());
    assert_eq!(limited.municipalities, result.municipalities);

    // 3. Bulk search
    let bulk = searcher.search_bulk(&["Praha", "Brno"]);
    assert_eq!(bulk[0], result);
    assert_eq!(bulk[1], searcher.search("Brno"));

    // 4. Random hierarchy
    let path = searcher.random_hierarchy().expect("Sampling should work");
    let territory = searcher.search(&path.cadastral_territory.name);
    assert!(
        territory
            .cadastral_territories
            .iter()
            .any(|m| m.id == MatchId::Unit(path.cadastral_territory.id)
                && m.parents.municipality.as_deref() == Some(path.municipality.name.as_str()))
    );
}

#[test]
fn test_praha_district_has_region_parent() {
    let result = searcher().search("Praha");
    let district = result
        .districts
        .iter()
        .find(|m| m.level == Level::District)
        .expect("At least one district should contain 'Praha'");
    assert!(district.parents.region.is_some());
    assert!(district.parents.district.is_none());
    assert!(district.parents.municipality.is_none());
}

#[test]
fn test_empty_term_returns_every_level() {
    let searcher = searcher();
    let result = searcher.search("");
    let summary = searcher.info().summary;
    for level in Level::ALL {
        assert!(!result.matches(level).is_empty(), "level {level}");
        assert_eq!(result.matches(level).len(), summary.count(level));
    }
}

#[test]
fn test_unknown_term_returns_empty_levels() {
    let result = searcher().search("zzz-no-such-place");
    assert_eq!(result.search_term, "zzz-no-such-place");
    assert_eq!(result.total_matches(), 0);
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({
            "searchTerm": "zzz-no-such-place",
            "regions": [],
            "districts": [],
            "municipalities": [],
            "cadastral_territories": [],
        })
    );
}

#[test]
fn test_case_and_accent_insensitive() {
    let searcher = searcher();
    let upper = searcher.search("PRAHA");
    let lower = searcher.search("praha");
    assert_eq!(upper.iter().collect::<Vec<_>>(), lower.iter().collect::<Vec<_>>());

    for term in ["Ricany", "RICANY", "říčany"] {
        let result = searcher.search(term);
        assert!(
            result.municipalities.iter().any(|m| m.name == "Říčany"),
            "'{term}' should match Říčany"
        );
    }
    assert!(
        !searcher
            .search("Recany")
            .municipalities
            .iter()
            .any(|m| m.name == "Říčany")
    );
}

#[test]
fn test_match_json_shape() {
    let result = searcher().search("Tišnov");

    let municipality = serde_json::to_value(&result.municipalities[0]).unwrap();
    assert_eq!(municipality["type"], "municipality");
    assert_eq!(municipality["name"], "Tišnov");
    assert!(municipality["id"].is_u64());
    assert_eq!(municipality["parents"]["region"], "Jihomoravský kraj");
    assert_eq!(municipality["parents"]["district"], "Brno-venkov");
    assert!(municipality["parents"].get("municipality").is_none());

    let region = serde_json::to_value(&searcher().search("Jihomoravský").regions[0]).unwrap();
    assert_eq!(
        region,
        json!({
            "type": "region",
            "name": "Jihomoravský kraj",
            "id": "Jihomoravský kraj",
            "parents": {},
        })
    );
}

#[test]
fn test_random_hierarchy_json_shape() {
    let searcher = UnitSearcher::builder().seed(5).build().unwrap();
    let path = searcher.random_hierarchy().unwrap();
    let value = serde_json::to_value(&path).unwrap();
    for key in ["region", "district", "municipality", "cadastral_territory"] {
        assert!(value[key]["name"].is_string(), "{key}");
        assert!(value[key]["id"].is_u64(), "{key}");
    }
}

#[test]
fn test_random_hierarchy_is_consistent() {
    let searcher = searcher();
    let data = searcher.units();
    for _ in 0..200 {
        let path = searcher.random_hierarchy().unwrap();
        let region = data
            .regions
            .iter()
            .find(|r| r.id == path.region.id)
            .unwrap();
        let district = region
            .districts
            .iter()
            .find(|d| d.id == path.district.id)
            .expect("district is a child of the region");
        let municipality = district
            .municipalities
            .iter()
            .find(|m| m.id == path.municipality.id)
            .expect("municipality is a child of the district");
        assert!(
            municipality
                .cadastral_territories
                .iter()
                .any(|t| t.id == path.cadastral_territory.id)
        );
    }
}

#[test]
fn test_file_data_source() {
    setup_test_env();
    let file = create_test_data(&TestDataConfig::default()).unwrap();
    let searcher = UnitSearcher::builder()
        .data_source(DataSource::File(file.path().to_path_buf()))
        .build()
        .expect("Should load test data");

    let info = searcher.info();
    assert!(!info.is_embedded());
    assert_eq!(info.summary.count(Level::Region), 4);
    assert_eq!(info.summary.count(Level::CadastralTerritory), 4 * 3 * 3 * 2);
    assert_eq!(searcher.search("Kraj").regions.len(), 4);
}

#[test]
fn test_missing_file_is_an_error() {
    setup_test_env();
    let result = UnitSearcher::from_source(&DataSource::File(
        "/nonexistent/uzemi/units.json".into(),
    ));
    assert!(matches!(result, Err(uzemi::error::UzemiError::Data(_))));
}
