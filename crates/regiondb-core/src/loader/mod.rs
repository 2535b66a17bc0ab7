// crates/regiondb-core/src/loader/mod.rs

//! # Dump loader
//!
//! Walks the two title dumps on disk, feeds the raw tables to the decoders
//! and assembles a sorted [`RegionDb`].
//!
//! ```text
//! <regions title>/content/00/<folder>/country.bin
//! <regions title>/content/00/<folder>/<country id>.bin
//! <iso title>/content/country.txt
//! ```

pub mod common_io;
mod extract;
#[cfg(feature = "json")]
mod export;

pub use common_io::CompressionMode;
pub use extract::{decode_folder, list_content_folders};

use crate::common::DecodeOptions;
use std::path::{Path, PathBuf};

/// Directory holding one sub-folder per country group.
pub const CONTENT_DIR: &str = "content/00";
/// Country table inside each content folder.
pub const COUNTRY_TABLE: &str = "country.bin";
/// Content folder that never holds country data.
pub const SKIPPED_FOLDER: &str = "OTHER";
/// ISO code list, relative to the ISO title root.
pub const ISO_CODE_LIST: &str = "content/country.txt";
/// Name of the exported document.
pub const OUTPUT_FILENAME: &str = "regions.json";

/// Everything one extraction run needs.
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Root of the regions title dump (the one holding `content/00`).
    pub regions_title_dir: PathBuf,
    /// Root of the title dump holding `content/country.txt`.
    pub iso_title_dir: PathBuf,
    /// Directory the document is written to.
    pub out_dir: PathBuf,
    pub options: DecodeOptions,
    pub compression: CompressionMode,
}

impl ExtractConfig {
    pub fn new(
        regions_title_dir: impl Into<PathBuf>,
        iso_title_dir: impl Into<PathBuf>,
        out_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            regions_title_dir: regions_title_dir.into(),
            iso_title_dir: iso_title_dir.into(),
            out_dir: out_dir.into(),
            options: DecodeOptions::default(),
            compression: CompressionMode::default(),
        }
    }

    pub fn with_options(mut self, options: DecodeOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_compression(mut self, compression: CompressionMode) -> Self {
        self.compression = compression;
        self
    }

    pub fn content_dir(&self) -> PathBuf {
        self.regions_title_dir.join(CONTENT_DIR)
    }

    pub fn iso_code_list(&self) -> PathBuf {
        self.iso_title_dir.join(ISO_CODE_LIST)
    }

    pub fn output_path(&self) -> PathBuf {
        output_path(&self.out_dir, self.compression)
    }
}

/// `<dir>/regions.json`, plus `.gz` when compressed.
pub fn output_path(dir: &Path, compression: CompressionMode) -> PathBuf {
    dir.join(format!("{OUTPUT_FILENAME}{}", compression.file_suffix()))
}
