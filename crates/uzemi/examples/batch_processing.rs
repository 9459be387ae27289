//! Batch processing for bulk lookups
//!
//! This example demonstrates running many searches at once. Bulk searches run
//! in parallel and return one result per term, in input order.

use std::time::Instant;

use uzemi::{Match, SearchConfigBuilder, SearchResult, UnitSearcher};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let searcher = UnitSearcher::new_embedded()?;

    let queries = vec![
        "Praha",
        "Brno",
        "Ostrava",
        "Říčany",
        "Kutna Hora",
        "Tišnov",
        "Opava",
        "Znojmo",
    ];

    println!("Processing {} queries...", queries.len());

    compare_performance(&searcher, &queries);
    batch_search_with_config(&searcher, &queries);

    Ok(())
}

fn compare_performance(searcher: &UnitSearcher, queries: &[&str]) {
    println!("\nPerformance comparison:");

    let start = Instant::now();
    let individual_results: Vec<SearchResult> =
        queries.iter().map(|q| searcher.search(q)).collect();
    let individual_time = start.elapsed();

    let start = Instant::now();
    let batch_results = searcher.search_bulk(queries);
    let batch_time = start.elapsed();

    println!("  Individual: {individual_time:?}");
    println!("  Batch:      {batch_time:?}");
    println!("  Same results: {}", individual_results == batch_results);
}

fn batch_search_with_config(searcher: &UnitSearcher, queries: &[&str]) {
    println!("\nBatch search limited to municipalities and cadastral territories:");

    let config = SearchConfigBuilder::settlements().build();
    let results = searcher.search_bulk_with_config(queries, &config);

    for (query, result) in queries.iter().zip(&results) {
        match result.municipalities.first() {
            Some(top) => println!("  {query}: {}", build_hierarchy_string(top)),
            None => println!(
                "  {query}: no municipality ({} territories)",
                result.cadastral_territories.len()
            ),
        }
    }
}

fn build_hierarchy_string(m: &Match) -> String {
    let mut parts = Vec::new();

    if let Some(region) = &m.parents.region {
        parts.push(region.as_str());
    }
    if let Some(district) = &m.parents.district {
        parts.push(district.as_str());
    }
    parts.push(m.name.as_str());

    parts.join(" → ")
}
