//! Basic usage example for regiondb-core
//!
//! Loads an exported `regions.json` (or `regions.json.gz`) and shows how to:
//! - Print database statistics
//! - Look up a country by ISO code, id or name
//! - Walk its regions and their coordinates
//! - Search regions across translations
//!
//! ```text
//! cargo run -p regiondb-core --example basic_usage -- out/regions.json DE
//! ```

use regiondb_core::prelude::*;
use regiondb_core::Language;

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "regions.json".to_owned());
    let country = args.next().unwrap_or_else(|| "JP".to_owned());

    println!("=== regiondb Basic Usage Example ===\n");

    let db = RegionDb::load_json(&path)?;
    let stats = db.stats();
    println!("Loaded {path}");
    println!("  Countries: {}", stats.countries);
    println!("  Regions: {} ({} unspecified)\n", stats.regions, stats.unspecified);

    println!("--- Lookup: {country} ---");
    match db.find_country(&country) {
        Some(c) => {
            println!("{} ({}, id {})", c.name, c.iso_code, c.id);
            println!("Japanese: {}", c.translations.get(Language::Japanese));
            for r in c.named_regions().take(5) {
                println!(
                    "  {:>3}. {} ({:.3}, {:.3})",
                    r.individual_id, r.name, r.coordinates.latitude, r.coordinates.longitude
                );
            }
        }
        None => println!("Not found: {country}"),
    }
    println!();

    println!("--- Search: \"berg\" ---");
    for (region, country) in db.find_regions_by_substring("berg").into_iter().take(5) {
        println!("  {} — {}", region.name, country.name);
    }

    Ok(())
}
