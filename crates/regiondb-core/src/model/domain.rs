// crates/regiondb-core/src/model/domain.rs

use super::translations::TranslationSet;
use crate::coords;
use serde::{Deserialize, Serialize, Serializer};

/// Display name given to each country's sentinel region.
pub const UNSPECIFIED_NAME: &str = "Unspecified";

/// The whole decoded database: every country, sorted by id, each carrying
/// its own regions. Serializes as a bare JSON array.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionDb {
    pub countries: Vec<Country>,
}

/// A country record from `country.bin`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub id: u32,
    pub iso_code: String,
    /// Copy of the English translation.
    pub name: String,
    pub translations: TranslationSet,
    /// Filled in by the extractor; empty straight out of the country decoder.
    #[serde(default)]
    pub regions: Vec<Region>,
    /// Number of non-"Unspecified" regions the country table claims.
    /// Kept for cross-checking only, never exported.
    #[serde(skip)]
    pub declared_regions: u32,
}

/// A region record from a per-country `<id>.bin` table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Region {
    /// Packed id as stored on disk (big-endian).
    pub id: u32,
    /// Bits 16..24 of `id`.
    pub individual_id: u8,
    pub name: String,
    pub translations: TranslationSet,
    pub coordinates: Coordinates,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    #[serde(serialize_with = "serialize_degrees")]
    pub latitude: f64,
    #[serde(serialize_with = "serialize_degrees")]
    pub longitude: f64,
}

/// Whole degrees are written as integers (`-90`, not `-90.0`), matching the
/// documents produced by the original dump tool.
fn serialize_degrees<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() <= 360.0 {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

impl Coordinates {
    /// Build from the two packed 16-bit codes stored in a region record.
    pub fn from_codes(lat_code: u16, lon_code: u16) -> Self {
        let (latitude, longitude) = coords::unpack(lat_code, lon_code);
        Self {
            latitude,
            longitude,
        }
    }
}

impl Region {
    /// Extract the per-country region number from a packed id.
    #[inline]
    pub fn individual_id_of(id: u32) -> u8 {
        ((id >> 16) & 0xFF) as u8
    }

    /// A packed id whose low 24 bits are clear names the sentinel record.
    #[inline]
    pub fn is_unspecified_id(id: u32) -> bool {
        id & 0x00FF_FFFF == 0
    }

    pub fn is_unspecified(&self) -> bool {
        Self::is_unspecified_id(self.id)
    }
}

impl Country {
    /// The regions excluding the "Unspecified" sentinel.
    pub fn named_regions(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter().filter(|r| !r.is_unspecified())
    }
}
