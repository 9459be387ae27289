//! Data source and initialization patterns
//!
//! This example demonstrates the different ways to give `UnitSearcher` a
//! dataset: the embedded sample, a JSON file, the `UZEMI_DATA_PATH`
//! environment variable, or an already decoded hierarchy.

use uzemi::{
    DataSource, UnitSearcher,
    data_processing::{TestDataConfig, create_test_data, create_test_hierarchy},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Uzemi UnitSearcher - Data Source Examples\n");

    // Method 1: Use embedded data
    println!("1. Using embedded data:");
    let embedded = UnitSearcher::new_embedded()?;
    println!("   {}\n", embedded.info().summary());

    // Method 2: Load a JSON file in the same layout
    println!("2. Loading a JSON file:");
    let file = create_test_data(&TestDataConfig::sample())?;
    let from_file = UnitSearcher::from_source(&DataSource::File(file.path().to_path_buf()))?;
    let result = from_file.search("okres 2-");
    println!("   {}", from_file.info().summary());
    println!("   Found {} districts for 'okres 2-'\n", result.districts.len());

    // Method 3: Path from UZEMI_DATA_PATH, falling back to embedded data
    println!("3. Resolving from the environment:");
    let from_env = UnitSearcher::from_source(&DataSource::Env)?;
    println!("   Resolved to {:?}\n", from_env.info().data_source);

    // Method 4: Wrap a hierarchy built in memory
    println!("4. In-memory hierarchy:");
    let in_memory = UnitSearcher::from(create_test_hierarchy(&TestDataConfig::minimal()));
    println!("   {}", in_memory.info().summary());

    Ok(())
}
