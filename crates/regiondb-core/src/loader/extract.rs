// crates/regiondb-core/src/loader/extract.rs
use super::common_io::read_file;
use super::{ExtractConfig, COUNTRY_TABLE, SKIPPED_FOLDER};
use crate::common::DecodeOptions;
use crate::decode::{decode_countries, decode_regions};
use crate::error::{RegionDbError, Result};
use crate::iso::IsoCodeTable;
use crate::model::{Country, RegionDb};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

impl IsoCodeTable {
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = read_file(path)?;
        let table = Self::parse(&String::from_utf8_lossy(&bytes));
        debug!(path = %path.display(), codes = table.len(), "loaded iso code table");
        Ok(table)
    }
}

impl RegionDb {
    /// Decode both dumps named by `config` into a database sorted by
    /// country id. The first failing table aborts the whole run.
    pub fn extract(config: &ExtractConfig) -> Result<Self> {
        let iso_codes = IsoCodeTable::load_from_path(config.iso_code_list())?;
        Self::extract_with_codes(&config.content_dir(), &iso_codes, config.options)
    }

    /// Same as [`extract`](Self::extract) with an already loaded ISO table.
    pub fn extract_with_codes(
        content_dir: &Path,
        iso_codes: &IsoCodeTable,
        options: DecodeOptions,
    ) -> Result<Self> {
        let mut db = RegionDb::default();
        for folder in list_content_folders(content_dir)? {
            let countries = decode_folder(&folder, iso_codes, options)?;
            db.countries.extend(countries);
        }
        db.sort();

        let stats = db.stats();
        info!(
            countries = stats.countries,
            regions = stats.regions,
            "extracted region database"
        );
        Ok(db)
    }
}

/// Sub-directories of `content_dir`, in name order, minus `OTHER`.
pub fn list_content_folders(content_dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(content_dir).map_err(|e| {
        RegionDbError::NotFound(format!(
            "Content directory not found at {}: {}",
            content_dir.display(),
            e
        ))
    })?;

    let mut folders = Vec::new();
    for entry in entries {
        let entry = entry?;
        if entry.file_name() == SKIPPED_FOLDER || !entry.file_type()?.is_dir() {
            continue;
        }
        folders.push(entry.path());
    }
    folders.sort();
    Ok(folders)
}

/// Decode one content folder: its `country.bin` and every `<id>.bin` it
/// refers to.
pub fn decode_folder(
    folder: &Path,
    iso_codes: &IsoCodeTable,
    options: DecodeOptions,
) -> Result<Vec<Country>> {
    let buf = read_file(&folder.join(COUNTRY_TABLE))?;
    let mut countries = decode_countries(&buf, iso_codes, options)?;
    debug!(folder = %folder.display(), countries = countries.len(), "decoded country table");

    for country in &mut countries {
        let path = folder.join(format!("{}.bin", country.id));
        let buf = read_file(&path)?;
        country.regions = decode_regions(&buf, options)?;

        let named = country.named_regions().count();
        if named != country.declared_regions as usize {
            warn!(
                country = country.id,
                iso = %country.iso_code,
                declared = country.declared_regions,
                found = named,
                "region count in country.bin disagrees with region table"
            );
        }
    }

    Ok(countries)
}
