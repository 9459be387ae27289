//! Random hierarchy sampling
//!
//! Draws complete region → district → municipality → cadastral territory
//! paths, first with the thread-local generator and then with a seeded
//! searcher whose sequence repeats across runs.

use uzemi::{Level, RandomHierarchy, UnitSearcher};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let searcher = UnitSearcher::new_embedded()?;

    println!("Three random paths:");
    for _ in 0..3 {
        print_path(&searcher.random_hierarchy()?);
    }

    println!("\nSeeded searcher (same output every run):");
    let seeded = UnitSearcher::builder().seed(2024).build()?;
    for _ in 0..3 {
        print_path(&seeded.random_hierarchy()?);
    }

    // Serialized form, as returned by a JSON API
    let path = seeded.random_hierarchy()?;
    println!("\n{}", serde_json::to_string_pretty(&path)?);

    Ok(())
}

fn print_path(path: &RandomHierarchy) {
    let parts: Vec<String> = Level::ALL
        .into_iter()
        .map(|level| {
            let unit = path.get(level);
            format!("{} ({})", unit.name, unit.id)
        })
        .collect();
    println!("  {}", parts.join(" → "));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_test_env() {
        let _ = uzemi::init_logging(tracing::Level::WARN);
    }

    #[test]
    fn test_random_hierarchy_example() {
        setup_test_env();
        assert!(
            main().is_ok(),
            "Random hierarchy example should run successfully"
        );
    }
}
