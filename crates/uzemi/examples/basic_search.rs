//! Basic territorial unit search
//!
//! This example demonstrates the fundamental search operations:
//! - Creating a searcher instance using embedded data
//! - Accent- and case-insensitive searches
//! - Working with matches and their parents

use uzemi::{Match, SearchResult, UnitSearcher};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Create searcher instance using embedded data
    let searcher = UnitSearcher::new_embedded()?;

    println!("Searching for 'Praha':");
    let result = searcher.search("Praha");
    print_search_result(&result, 3);

    // Diacritics are optional in the query
    println!("\nSearching for 'ceske budejovice':");
    let result = searcher.search("ceske budejovice");
    print_search_result(&result, 3);

    println!("\nSearching for 'OSTRAVA':");
    let result = searcher.search("OSTRAVA");
    print_search_result(&result, 3);

    Ok(())
}

fn print_search_result(result: &SearchResult, limit: usize) {
    println!(
        "  {} matches for '{}'",
        result.total_matches(),
        result.search_term
    );

    for m in result.iter().take(limit) {
        println!("  - {} ({}) {}", m.name, m.level, describe_parents(m));
    }

    if result.total_matches() > limit {
        println!("  ... and {} more", result.total_matches() - limit);
    }
}

fn describe_parents(m: &Match) -> String {
    let path: Vec<&str> = m
        .parents
        .region
        .iter()
        .chain(&m.parents.district)
        .chain(&m.parents.municipality)
        .map(String::as_str)
        .collect();

    if path.is_empty() {
        String::new()
    } else {
        format!("in {}", path.join(" → "))
    }
}
