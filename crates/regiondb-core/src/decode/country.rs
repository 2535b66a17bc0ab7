// crates/regiondb-core/src/decode/country.rs

//! `country.bin` decoder.
//!
//! ## Record layout (0x83C bytes)
//! ```text
//! [0x000] Id                 (u32 LE)  index into the ISO code table
//! [0x004] RegionCount        (u32)     regions excluding "Unspecified"
//! [0x008] Padding            (4 bytes)
//! [0x00C] Translations       (16 × 0x80, UTF-16 BE, NUL-terminated)
//! [0x80C] Unused             (0x30 bytes)
//! ```

use super::{check_capacity, read_translations};
use crate::common::DecodeOptions;
use crate::error::{Result, TableKind};
use crate::iso::IsoCodeTable;
use crate::model::Country;
use crate::stream::ByteCursor;

pub const COUNTRY_RECORD_SIZE: usize = 0x83C;

const UNUSED_TAIL: usize = 0x30;

/// Decode every country record, in file order.
///
/// The returned countries have no regions yet.
pub fn decode_countries(
    buf: &[u8],
    iso_codes: &IsoCodeTable,
    options: DecodeOptions,
) -> Result<Vec<Country>> {
    let mut cursor = ByteCursor::with_mode(buf, options.mode);

    let count = cursor.read_u32_be()?;
    check_capacity(
        TableKind::Country,
        cursor.capacity(),
        count,
        u64::from(count),
        COUNTRY_RECORD_SIZE,
    )?;

    let mut countries = Vec::with_capacity(count as usize);
    for _ in 0..count {
        let id = cursor.read_u32_le()?;
        let iso_code = iso_codes.resolve(id, options.mode)?;
        // Assumed big-endian like the table headers.
        let declared_regions = cursor.read_u32_be()?;
        cursor.skip(4);

        let translations = read_translations(&mut cursor)?;
        cursor.skip(UNUSED_TAIL);

        countries.push(Country {
            id,
            iso_code,
            name: translations.english().to_owned(),
            translations,
            regions: Vec::new(),
            declared_regions,
        });
    }

    Ok(countries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::DecodeMode;
    use crate::decode::fixtures::{country_record, table};
    use crate::error::RegionDbError;
    use crate::model::Language;

    fn iso() -> IsoCodeTable {
        IsoCodeTable::from_codes(["", "JP", "", "", "", "TL", "US"])
    }

    #[test]
    fn decodes_single_country() {
        let buf = table(1, &[country_record(5, 3, "Testland")]);
        let countries = decode_countries(&buf, &iso(), DecodeOptions::default()).unwrap();
        assert_eq!(countries.len(), 1);
        let c = &countries[0];
        assert_eq!(c.id, 5);
        assert_eq!(c.iso_code, "TL");
        assert_eq!(c.name, "Testland");
        assert_eq!(c.translations.get(Language::English), "Testland");
        assert_eq!(c.translations.get(Language::Japanese), "");
        assert_eq!(c.declared_regions, 3);
        assert!(c.regions.is_empty());
    }

    #[test]
    fn keeps_file_order() {
        let buf = table(
            3,
            &[
                country_record(6, 0, "United States"),
                country_record(1, 0, "Japan"),
                country_record(5, 0, "Testland"),
            ],
        );
        let ids: Vec<u32> = decode_countries(&buf, &iso(), DecodeOptions::default())
            .unwrap()
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![6, 1, 5]);
    }

    #[test]
    fn empty_table_is_valid() {
        let buf = table(0, &[]);
        assert!(decode_countries(&buf, &iso(), DecodeOptions::default())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn count_mismatch_reports_room_and_declared() {
        let buf = table(3, &[country_record(1, 0, "Japan"), country_record(5, 0, "T")]);
        let err = decode_countries(&buf, &iso(), DecodeOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            RegionDbError::FormatMismatch {
                table: TableKind::Country,
                max_records: 2,
                declared: 3,
            }
        ));
        assert_eq!(
            err.to_string(),
            "Number of countries in country.bin does not match. File has room for 2, got 3"
        );
    }

    #[test]
    fn trailing_bytes_are_a_mismatch() {
        let mut buf = table(1, &[country_record(1, 0, "Japan")]);
        buf.push(0);
        assert!(decode_countries(&buf, &iso(), DecodeOptions::default()).is_err());
    }

    #[test]
    fn unknown_iso_id_depends_on_mode() {
        let buf = table(1, &[country_record(200, 0, "Nowhere")]);
        let faithful = decode_countries(&buf, &iso(), DecodeOptions::default()).unwrap();
        assert_eq!(faithful[0].iso_code, "");

        let strict = decode_countries(
            &buf,
            &iso(),
            DecodeOptions {
                mode: DecodeMode::Strict,
            },
        );
        assert!(matches!(strict, Err(RegionDbError::TruncatedInput { .. })));
    }

    #[test]
    fn short_buffer_in_strict_mode() {
        let err = decode_countries(&[0, 0], &iso(), DecodeOptions::strict()).unwrap_err();
        assert!(matches!(err, RegionDbError::TruncatedInput { .. }));
        // Faithful mode reads a zero count from two bytes and then fails the size check.
        let err = decode_countries(&[0, 0], &iso(), DecodeOptions::default()).unwrap_err();
        assert!(matches!(err, RegionDbError::FormatMismatch { declared: 0, .. }));
    }
}
