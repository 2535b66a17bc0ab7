// crates/regiondb-core/src/iso.rs

//! The ISO country-code list shipped in a sibling title (`country.txt`).
//!
//! The file is a single comma-separated list of quoted codes; the position
//! of a code is the numeric country id used by `country.bin`.

use crate::common::DecodeMode;
use crate::error::{RegionDbError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IsoCodeTable {
    codes: Vec<String>,
}

impl IsoCodeTable {
    /// Parse the comma-separated list. Quotes and line breaks are stripped
    /// from every entry; empty entries keep their slot.
    pub fn parse(text: &str) -> Self {
        let codes = text
            .split(',')
            .map(|code| code.replace(['\n', '\r', '"'], ""))
            .collect();
        Self { codes }
    }

    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            codes: codes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&str> {
        self.codes.get(id as usize).map(String::as_str)
    }

    /// Look up the code for `id`. An unknown id resolves to `""` in
    /// faithful mode and to [`RegionDbError::TruncatedInput`] in strict mode.
    pub fn resolve(&self, id: u32, mode: DecodeMode) -> Result<String> {
        match self.get(id) {
            Some(code) => Ok(code.to_owned()),
            None if mode.is_strict() => Err(RegionDbError::TruncatedInput {
                context: "iso code table",
                needed: id as usize + 1,
                available: self.codes.len(),
            }),
            None => Ok(String::new()),
        }
    }
}
