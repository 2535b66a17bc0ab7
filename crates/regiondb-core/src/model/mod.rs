// crates/regiondb-core/src/model/mod.rs
pub mod domain;
pub mod search;
pub mod translations;

pub use domain::{Coordinates, Country, Region, RegionDb, UNSPECIFIED_NAME};
pub use translations::{Language, TranslationSet, TRANSLATION_SLOTS};
