// crates/regiondb-core/src/common.rs

//! Shared configuration and summary types used by both the decoders and
//! the extractor.

/// How the decoders react to input the dump format never produces.
///
/// `Faithful` reproduces the original tooling byte-for-byte: short reads are
/// truncated and unknown country ids map to an empty ISO code. `Strict` turns
/// both into [`RegionDbError::TruncatedInput`](crate::RegionDbError::TruncatedInput).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodeMode {
    #[default]
    Faithful,
    Strict,
}

impl DecodeMode {
    #[inline]
    pub fn is_strict(self) -> bool {
        matches!(self, DecodeMode::Strict)
    }
}

/// Options threaded through every decode call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    pub mode: DecodeMode,
}

impl DecodeOptions {
    pub fn strict() -> Self {
        Self {
            mode: DecodeMode::Strict,
        }
    }
}

/// Simple aggregate statistics for a decoded database.
///
/// Returned by [`RegionDb::stats`](crate::RegionDb::stats).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DbStats {
    pub countries: usize,
    /// All region records, including the per-country "Unspecified" entries.
    pub regions: usize,
    /// Number of "Unspecified" sentinel records.
    pub unspecified: usize,
}
