//! regiondb — extract and inspect the Wii U region database
//!
//! `extract` walks the two title dumps and writes `regions.json`: one entry
//! per country, sorted by id, each with its regions, translations and
//! decoded coordinates.
//!
//! The remaining commands read an exported document (`--input`, default
//! `./regions.json`):
//!
//! - Show overall stats
//!   $ regiondb stats
//!
//! - List countries
//!   $ regiondb countries
//!
//! - List the regions of a country (ISO code, id or name)
//!   $ regiondb regions DE
//!
//! - Search regions by name
//!   $ regiondb search bayern
//!
//! Logging goes to stderr and honours `RUST_LOG`; `-v` forces debug output.
mod args;

use crate::args::{CliArgs, Commands, ExtractArgs};
use anyhow::{bail, Context};
use clap::Parser;
use regiondb_core::{CompressionMode, DecodeMode, DecodeOptions, ExtractConfig, RegionDb};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "regiondb=info,regiondb_core=info";

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("regiondb=debug,regiondb_core=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    let input = args.input;
    let load = || {
        RegionDb::load_json(&input)
            .with_context(|| format!("failed to load {}", input.display()))
    };

    match args.command {
        Commands::Extract(extract) => run_extract(&extract)?,

        Commands::Stats => {
            let stats = load()?.stats();
            println!("Database statistics:");
            println!("  Countries: {}", stats.countries);
            println!("  Regions: {}", stats.regions);
            println!("  Unspecified: {}", stats.unspecified);
        }

        Commands::Countries => {
            for c in load()?.countries() {
                println!("{:>3}  {:<2}  {}", c.id, c.iso_code, c.name);
            }
        }

        Commands::Regions { country } => {
            let db = load()?;
            let Some(c) = db.find_country(&country) else {
                bail!("No country found for: {country}");
            };
            println!("Regions in {} ({}):", c.name, c.iso_code);
            for r in &c.regions {
                println!(
                    "- {:>3} {} ({:.4}, {:.4})",
                    r.individual_id, r.name, r.coordinates.latitude, r.coordinates.longitude
                );
            }
        }

        Commands::Search { query } => {
            let db = load()?;
            let matches = db.find_regions_by_substring(&query);
            if matches.is_empty() {
                println!("No regions found matching: {query}");
            } else {
                for (region, country) in matches {
                    println!("{} — {} ({})", region.name, country.name, country.iso_code);
                }
            }
        }
    }

    Ok(())
}

fn run_extract(args: &ExtractArgs) -> anyhow::Result<()> {
    let mode = if args.strict {
        DecodeMode::Strict
    } else {
        DecodeMode::Faithful
    };
    let compression = if args.gzip {
        CompressionMode::Gzip
    } else {
        CompressionMode::None
    };

    let config = ExtractConfig::new(
        &args.regions_title_dump,
        &args.iso_title_dump,
        &args.out,
    )
    .with_options(DecodeOptions { mode })
    .with_compression(compression);

    debug!(?config, "starting extraction");
    let db = RegionDb::extract(&config).with_context(|| {
        format!(
            "failed to extract from {}",
            config.regions_title_dir.display()
        )
    })?;
    let path = db
        .save(&config.out_dir, config.compression)
        .context("failed to write output")?;

    let stats = db.stats();
    println!(
        "Wrote {} countries / {} regions to {}",
        stats.countries,
        stats.regions,
        path.display()
    );
    Ok(())
}
