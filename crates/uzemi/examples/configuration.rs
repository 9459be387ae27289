//! Search configuration and customization
//!
//! This example demonstrates how to restrict searches to some levels and
//! how to switch case and accent folding off.

use uzemi::{Level, SearchConfig, SearchConfigBuilder, UnitSearcher};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let searcher = UnitSearcher::new_embedded()?;

    println!("Comparing different search configurations:\n");

    test_preset_configs(&searcher, "kutna hora");
    test_custom_configs(&searcher, "Brno")?;
    test_folding(&searcher);

    Ok(())
}

fn report(searcher: &UnitSearcher, label: &str, term: &str, config: &SearchConfig) {
    let result = searcher.search_with_config(term, config);
    let counts: Vec<String> = Level::ALL
        .into_iter()
        .map(|level| format!("{}={}", level, result.matches(level).len()))
        .collect();
    println!("  {label:<14} '{term}': {}", counts.join(", "));
}

fn test_preset_configs(searcher: &UnitSearcher, term: &str) {
    println!("Preset configurations:");

    report(searcher, "Default:", term, &SearchConfig::default());
    report(
        searcher,
        "Settlements:",
        term,
        &SearchConfigBuilder::settlements().build(),
    );
    report(
        searcher,
        "Strict:",
        term,
        &SearchConfigBuilder::strict().build(),
    );
    println!();
}

fn test_custom_configs(
    searcher: &UnitSearcher,
    term: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Custom configurations:");

    let districts_only = SearchConfigBuilder::new()
        .levels(&[Level::District])?
        .build();
    report(searcher, "Districts:", term, &districts_only);

    let upper_levels = SearchConfigBuilder::new()
        .levels(&[Level::Region])?
        .include_level(Level::District)
        .build();
    report(searcher, "Upper levels:", term, &upper_levels);

    // An empty level list is rejected
    if let Err(e) = SearchConfigBuilder::new().levels(&[]) {
        println!("  Empty levels:  {e}");
    }
    println!();

    Ok(())
}

fn test_folding(searcher: &UnitSearcher) {
    println!("Case and accent folding:");

    let accents_matter = SearchConfigBuilder::new().accent_sensitive(true).build();
    report(searcher, "Accented:", "cernosice", &accents_matter);
    report(searcher, "Accented:", "černošice", &accents_matter);

    let case_matters = SearchConfigBuilder::new().case_sensitive(true).build();
    report(searcher, "Case:", "tisnov", &case_matters);
    report(searcher, "Case:", "Tisnov", &case_matters);
}
