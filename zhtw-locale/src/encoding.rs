//! Byte-level helpers for the fixed UTF-16LE file encoding.
//!
//! BOMs are not special: a leading U+FEFF decodes to an ordinary character and
//! is written back unchanged.

use std::borrow::Cow;

use encoding_rs::{UTF_8, UTF_16LE};

/// Decodes UTF-16LE bytes strictly. Malformed input is rejected rather than
/// replaced, since a lossy decode would silently corrupt the output file.
pub fn decode_utf16le(bytes: &[u8]) -> Result<String, &'static str> {
    if bytes.len() % 2 != 0 {
        return Err("odd number of bytes for UTF-16LE");
    }
    UTF_16LE
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(Cow::into_owned)
        .ok_or("unpaired surrogate in UTF-16LE data")
}

/// Encodes text as UTF-16LE without adding a BOM.
///
/// `encoding_rs` only encodes to UTF-8 for UTF-16 labels, so the code units
/// are laid out by hand.
pub fn encode_utf16le(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

/// Decodes a UTF-8 text file, dropping a leading BOM.
///
/// Returns the text and whether any invalid sequences were replaced.
pub fn decode_utf8_lossy(bytes: &[u8]) -> (String, bool) {
    let (text, had_errors) = UTF_8.decode_with_bom_removal(bytes);
    (text.into_owned(), had_errors)
}
