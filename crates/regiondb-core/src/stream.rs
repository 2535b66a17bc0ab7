// crates/regiondb-core/src/stream.rs

//! Forward-only byte cursor used by the table decoders.
//!
//! The cursor never seeks backwards. In [`DecodeMode::Faithful`] it follows
//! the dump tool's historical behaviour: nothing is bounds-checked, a read
//! past the end yields a shortened slice, and integers read from a short
//! tail are zero-filled. In [`DecodeMode::Strict`] any short read becomes
//! [`RegionDbError::TruncatedInput`].

use crate::common::DecodeMode;
use crate::error::{RegionDbError, Result};

/// Sequential reader over an immutable byte buffer.
#[derive(Debug, Clone)]
pub struct ByteCursor<'a> {
    buf: &'a [u8],
    pos: usize,
    mode: DecodeMode,
}

impl<'a> ByteCursor<'a> {
    /// Wrap `buf` with the default (faithful) policy.
    pub fn new(buf: &'a [u8]) -> Self {
        Self::with_mode(buf, DecodeMode::Faithful)
    }

    pub fn with_mode(buf: &'a [u8], mode: DecodeMode) -> Self {
        Self { buf, pos: 0, mode }
    }

    /// Total length of the wrapped buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Current read offset. May exceed [`capacity`](Self::capacity) after
    /// an unchecked [`skip`](Self::skip).
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left between the read offset and the end of the buffer.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    /// Advance by `n` bytes without reading. Never fails; overruns show up
    /// on the next read.
    #[inline]
    pub fn skip(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n);
    }

    /// Borrow the next `n` bytes and advance past them.
    ///
    /// Faithful mode returns whatever is left (possibly empty) when fewer
    /// than `n` bytes remain; the position still advances by `n`.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        let available = self.remaining();
        if available < n && self.mode.is_strict() {
            return Err(RegionDbError::TruncatedInput {
                context: "byte cursor",
                needed: n,
                available,
            });
        }
        let start = self.pos.min(self.buf.len());
        let end = start + n.min(available);
        self.skip(n);
        Ok(&self.buf[start..end])
    }

    /// Read exactly `N` bytes into an array, zero-filling a short tail.
    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let src = self.read_bytes(N)?;
        let mut out = [0u8; N];
        out[..src.len()].copy_from_slice(src);
        Ok(out)
    }

    #[inline]
    pub fn read_u32_be(&mut self) -> Result<u32> {
        self.read_array().map(u32::from_be_bytes)
    }

    #[inline]
    pub fn read_u32_le(&mut self) -> Result<u32> {
        self.read_array().map(u32::from_le_bytes)
    }

    #[inline]
    pub fn read_u16_be(&mut self) -> Result<u16> {
        self.read_array().map(u16::from_be_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_mixed_endianness_in_sequence() {
        let data = [0x00, 0x00, 0x00, 0x02, 0x05, 0x00, 0x00, 0x00, 0xAB, 0xCD];
        let mut c = ByteCursor::new(&data);
        assert_eq!(c.capacity(), 10);
        assert_eq!(c.read_u32_be().unwrap(), 2);
        assert_eq!(c.read_u32_le().unwrap(), 5);
        assert_eq!(c.read_u16_be().unwrap(), 0xABCD);
        assert_eq!(c.position(), 10);
        assert_eq!(c.remaining(), 0);
    }

    #[test]
    fn read_bytes_is_a_view_and_skip_moves_forward() {
        let data = [1u8, 2, 3, 4, 5, 6];
        let mut c = ByteCursor::new(&data);
        c.skip(2);
        let view = c.read_bytes(3).unwrap();
        assert_eq!(view, &[3, 4, 5]);
        assert_eq!(view.as_ptr(), data[2..].as_ptr());
        assert_eq!(c.position(), 5);
    }

    #[test]
    fn faithful_mode_truncates_short_reads() {
        let data = [0xAAu8, 0xBB, 0xCC];
        let mut c = ByteCursor::new(&data);
        c.skip(1);
        assert_eq!(c.read_bytes(8).unwrap(), &[0xBB, 0xCC]);
        assert_eq!(c.position(), 9);
        assert!(c.read_bytes(4).unwrap().is_empty());
        assert_eq!(c.read_u16_be().unwrap(), 0);
    }

    #[test]
    fn faithful_mode_zero_fills_short_integers() {
        let data = [0x12u8, 0x34];
        let mut c = ByteCursor::new(&data);
        assert_eq!(c.read_u32_be().unwrap(), 0x1234_0000);
    }

    #[test]
    fn strict_mode_rejects_short_reads() {
        let data = [0u8; 3];
        let mut c = ByteCursor::with_mode(&data, DecodeMode::Strict);
        let err = c.read_u32_le().unwrap_err();
        assert!(matches!(
            err,
            RegionDbError::TruncatedInput {
                needed: 4,
                available: 3,
                ..
            }
        ));
    }

    #[test]
    fn strict_mode_notices_overrun_after_skip() {
        let data = [0u8; 4];
        let mut c = ByteCursor::with_mode(&data, DecodeMode::Strict);
        c.skip(6);
        assert!(c.read_bytes(1).is_err());
        assert!(c.read_bytes(0).unwrap().is_empty());
    }
}
