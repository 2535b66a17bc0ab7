// crates/regiondb-core/src/error.rs

//! Library-wide error and result types.

use std::fmt;
use thiserror::Error;

/// Which fixed-layout table a decode error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    /// `country.bin`
    Country,
    /// `<country id>.bin`
    Region,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableKind::Country => f.write_str("countries in country.bin"),
            TableKind::Region => f.write_str("regions in bin"),
        }
    }
}

/// All errors the library can produce.
#[derive(Debug, Error)]
pub enum RegionDbError {
    /// The leading record count does not agree with the buffer length.
    #[error("Number of {table} does not match. File has room for {max_records}, got {declared}")]
    FormatMismatch {
        table: TableKind,
        /// How many whole records the buffer could hold.
        max_records: usize,
        /// The count read from the table header.
        declared: u32,
    },

    /// A read ran past the end of its input. Only raised in strict mode.
    #[error("Truncated input in {context}: needed {needed}, only {available} available")]
    TruncatedInput {
        context: &'static str,
        needed: usize,
        available: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Result alias used throughout regiondb-core.
pub type Result<T> = std::result::Result<T, RegionDbError>;
