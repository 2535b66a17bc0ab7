// crates/regiondb-core/src/decode/mod.rs

//! # Table decoders
//!
//! Both table files share the same shape: a big-endian `u32` record count
//! followed by fixed-size records with no padding between them.
//!
//! ```text
//! country.bin   [count: u32 BE] [record × count]        record = 0x83C bytes
//! <id>.bin      [count: u32 BE] [record × (count + 1)]  record = 0x818 bytes
//! ```
//!
//! The decoders are pure: they borrow a buffer, never touch the file system
//! and never log.

pub mod country;
pub mod region;

pub use country::{decode_countries, COUNTRY_RECORD_SIZE};
pub use region::{decode_regions, REGION_RECORD_SIZE};

use crate::error::{RegionDbError, Result, TableKind};
use crate::model::{Language, TranslationSet};
use crate::stream::ByteCursor;
use crate::text::decode_swapped_utf16;

/// Width of one translation field.
pub const TRANSLATION_FIELD_SIZE: usize = 0x80;

/// Size of the table header (the record count).
pub const HEADER_SIZE: usize = 4;

/// Read the sixteen consecutive translation fields of one record.
pub(crate) fn read_translations(cursor: &mut ByteCursor<'_>) -> Result<TranslationSet> {
    let mut set = TranslationSet::default();
    for lang in Language::ALL {
        let field = cursor.read_bytes(TRANSLATION_FIELD_SIZE)?;
        set.set(lang, decode_swapped_utf16(field));
    }
    Ok(set)
}

/// Check that a buffer holds exactly `records` records of `record_size`
/// bytes after the header.
pub(crate) fn check_capacity(
    table: TableKind,
    capacity: usize,
    declared: u32,
    records: u64,
    record_size: usize,
) -> Result<()> {
    let expected = records * record_size as u64 + HEADER_SIZE as u64;
    if capacity as u64 != expected {
        return Err(RegionDbError::FormatMismatch {
            table,
            max_records: capacity.saturating_sub(HEADER_SIZE) / record_size,
            declared,
        });
    }
    Ok(())
}
