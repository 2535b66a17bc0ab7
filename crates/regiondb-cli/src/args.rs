use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for regiondb
#[derive(Debug, Parser)]
#[command(
    name = "regiondb",
    version,
    about = "Extract and inspect the Wii U region database (country/region tables)"
)]
pub struct CliArgs {
    /// Path to an exported regions.json (or regions.json.gz) for the inspection commands
    #[arg(
        short = 'i',
        long = "input",
        global = true,
        env = "REGIONDB_INPUT",
        default_value = "regions.json"
    )]
    pub input: PathBuf,

    /// Log debug output (overrides RUST_LOG)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Decode the title dumps and write regions.json
    Extract(ExtractArgs),

    /// Show a summary of an exported document
    Stats,

    /// List all countries
    Countries,

    /// List the regions of one country
    Regions {
        /// ISO code, numeric id or English name of the country
        country: String,
    },

    /// Search regions by name (case- and accent-insensitive)
    Search {
        /// Substring to search for
        query: String,
    },
}

#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Path to title 0005001B-10052000 dump (regions)
    #[arg(long = "regions-title-dump", env = "REGIONDB_REGIONS_TITLE_DUMP")]
    pub regions_title_dump: PathBuf,

    /// Path to title 0005001B-1005C000 dump (ISO codes)
    #[arg(long = "iso-title-dump", env = "REGIONDB_ISO_TITLE_DUMP")]
    pub iso_title_dump: PathBuf,

    /// Directory to write regions.json to
    #[arg(short = 'o', long = "out", env = "REGIONDB_OUT")]
    pub out: PathBuf,

    /// Fail on truncated tables and unknown country ids instead of
    /// reproducing the original tool's output
    #[arg(long)]
    pub strict: bool,

    /// Write regions.json.gz instead of plain JSON
    #[arg(long)]
    pub gzip: bool,
}
