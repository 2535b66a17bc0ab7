// crates/regiondb-core/src/text.rs

//! Text helpers: the on-disk string encoding and name folding for lookups.

/// Decode a fixed-width text field stored as big-endian UTF-16.
///
/// The field is read up to (excluding) the first NUL code unit. A trailing
/// odd byte is ignored and unpaired surrogates become U+FFFD.
pub fn decode_swapped_utf16(field: &[u8]) -> String {
    let units: Vec<u16> = field
        .chunks_exact(2)
        .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
        .take_while(|&unit| unit != 0)
        .collect();
    String::from_utf16_lossy(&units)
}

/// Convert a string into a folded key suitable for comparison.
///
/// Transliterates to ASCII with `deunicode` (e.g. `Île-de-France` ->
/// `Ile-de-France`) and lowercases the result.
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after folding with [`fold_key`].
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(s: &str, width: usize) -> Vec<u8> {
        let mut out: Vec<u8> = s.encode_utf16().flat_map(u16::to_be_bytes).collect();
        out.resize(width, 0);
        out
    }

    #[test]
    fn stops_at_first_nul() {
        let mut field = encode("Testland", 0x80);
        // Garbage after the terminator must not leak through.
        field[20..24].copy_from_slice(&[0x00, 0x41, 0x00, 0x42]);
        assert_eq!(decode_swapped_utf16(&field), "Testland");
    }

    #[test]
    fn decodes_non_latin_scripts() {
        assert_eq!(decode_swapped_utf16(&encode("日本", 0x80)), "日本");
        assert_eq!(decode_swapped_utf16(&encode("Россия", 0x80)), "Россия");
        assert_eq!(decode_swapped_utf16(&encode("𝄞", 0x80)), "𝄞");
    }

    #[test]
    fn empty_and_unterminated_fields() {
        assert_eq!(decode_swapped_utf16(&[0u8; 0x80]), "");
        assert_eq!(decode_swapped_utf16(&[]), "");
        let full = encode(&"x".repeat(64), 0x80);
        assert_eq!(decode_swapped_utf16(&full).len(), 64);
        // Odd tail byte is dropped.
        assert_eq!(decode_swapped_utf16(&[0x00, 0x41, 0x00]), "A");
    }

    #[test]
    fn folding_ignores_case_and_accents() {
        assert_eq!(fold_key("Île-de-France"), "ile-de-france");
        assert!(equals_folded("Zürich", "zurich"));
        assert!(!equals_folded("Bern", "Basel"));
    }
}
