// crates/regiondb-core/src/lib.rs

//! **regiondb-core** decodes the country and region tables of the Wii U
//! region/geolocation title into plain Rust records.
//!
//! The decoding layer ([`stream`], [`coords`], [`decode`]) is pure and works
//! on borrowed byte buffers. The [`loader`] module is the file-system side:
//! it walks a title dump, decodes every table and exports the result as a
//! single JSON document.
//!
//! ```rust
//! use regiondb_core::{decode_regions, DecodeOptions};
//!
//! // An empty region table still holds the "Unspecified" sentinel.
//! let mut buf = 0u32.to_be_bytes().to_vec();
//! buf.resize(4 + regiondb_core::decode::REGION_RECORD_SIZE, 0);
//!
//! let regions = decode_regions(&buf, DecodeOptions::default()).unwrap();
//! assert_eq!(regions.len(), 1);
//! assert_eq!(regions[0].name, "Unspecified");
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod coords;
pub mod decode;
pub mod error;
pub mod iso;
pub mod loader;
pub mod model;
pub mod stream;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::{DbStats, DecodeMode, DecodeOptions};
pub use crate::decode::{decode_countries, decode_regions};
pub use crate::error::{RegionDbError, Result, TableKind};
pub use crate::iso::IsoCodeTable;
pub use crate::loader::{CompressionMode, ExtractConfig};
pub use crate::model::{
    Coordinates, Country, Language, Region, RegionDb, TranslationSet, UNSPECIFIED_NAME,
};
pub use crate::stream::ByteCursor;

pub mod prelude {
    pub use crate::traits::NameMatch;
    pub use crate::{
        Country, DecodeMode, DecodeOptions, ExtractConfig, Language, Region, RegionDb,
        RegionDbError, Result,
    };
}
