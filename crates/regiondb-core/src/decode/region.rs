// crates/regiondb-core/src/decode/region.rs

//! `<country id>.bin` decoder.
//!
//! The header count excludes the "Unspecified" sentinel, which is stored as
//! the first record.
//!
//! ## Record layout (0x818 bytes)
//! ```text
//! [0x000] Id             (u32 BE)  0xCCRR_xxxx; RR = individual id
//! [0x004] Translations   (16 × 0x80, UTF-16 BE, NUL-terminated)
//! [0x804] Unused         (0x10 bytes)
//! [0x814] Latitude       (u16 BE, packed)
//! [0x816] Longitude      (u16 BE, packed)
//! ```

use super::{check_capacity, read_translations};
use crate::common::DecodeOptions;
use crate::error::{Result, TableKind};
use crate::model::{Coordinates, Region, UNSPECIFIED_NAME};
use crate::stream::ByteCursor;

pub const REGION_RECORD_SIZE: usize = 0x818;

const UNUSED_GAP: usize = 0x10;

/// Decode every region record (the sentinel included) sorted by id.
pub fn decode_regions(buf: &[u8], options: DecodeOptions) -> Result<Vec<Region>> {
    let mut cursor = ByteCursor::with_mode(buf, options.mode);

    let count = cursor.read_u32_be()?;
    let records = u64::from(count) + 1;
    check_capacity(
        TableKind::Region,
        cursor.capacity(),
        count,
        records,
        REGION_RECORD_SIZE,
    )?;

    let mut regions = Vec::with_capacity(records as usize);
    for _ in 0..records {
        let id = cursor.read_u32_be()?;
        let translations = read_translations(&mut cursor)?;
        cursor.skip(UNUSED_GAP);

        let lat_code = cursor.read_u16_be()?;
        let lon_code = cursor.read_u16_be()?;

        let name = if Region::is_unspecified_id(id) {
            UNSPECIFIED_NAME.to_owned()
        } else {
            translations.english().to_owned()
        };

        regions.push(Region {
            id,
            individual_id: Region::individual_id_of(id),
            name,
            translations,
            coordinates: Coordinates::from_codes(lat_code, lon_code),
        });
    }

    regions.sort_by_key(|r| r.id);
    Ok(regions)
}
