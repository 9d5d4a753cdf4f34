use super::raw_ascii::RawAsciiCodec;
use crate::constants::{BLOCK_LEN, MAX_FIELD_CHARS};
use crate::types::BlockData;

/// Current stored representation: the block text is the uppercase hex
/// rendering of the value's bytes, written as ASCII digit characters.
///
/// A block therefore holds 16 hex digits, i.e. 8 payload characters.
/// This format is a wire contract shared with cards already issued in the
/// field; it must not be simplified to storing the payload bytes
/// directly.
pub struct HexOfAsciiCodec;

impl HexOfAsciiCodec {
    /// Render the value as hex digit pairs and store the digits as block
    /// text. Values beyond 8 characters are silently truncated; the cut
    /// always lands on a pair boundary.
    pub fn encode(value: &str) -> BlockData {
        let mut digits = String::with_capacity(BLOCK_LEN);
        for b in value.bytes() {
            if digits.len() == 2 * MAX_FIELD_CHARS {
                break;
            }
            use std::fmt::Write;
            let _ = write!(&mut digits, "{:02X}", b);
        }
        RawAsciiCodec::encode(&digits)
    }

    /// Parse the block text as hex digit pairs back into payload
    /// characters, stopping at the first decoded `0x00` byte.
    ///
    /// Returns `None` when the text is not a well-formed hex string (odd
    /// length or non-hex characters), which is how legacy raw-ASCII
    /// blocks present themselves.
    pub fn decode(block: &BlockData) -> Option<String> {
        let text = RawAsciiCodec::decode(block);
        let bytes = hex_pairs(&text)?;
        let payload: String = bytes
            .into_iter()
            .take_while(|&b| b != 0)
            .map(|b| b as char)
            .collect();
        Some(payload)
    }
}

/// Strict pair parser: every character must be a hex digit and the length
/// even. No whitespace tolerance; block text never contains interior
/// separators.
pub(crate) fn hex_pairs(text: &str) -> Option<Vec<u8>> {
    if text.is_empty() || text.len() % 2 != 0 {
        return None;
    }
    if !text.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let mut out = Vec::with_capacity(text.len() / 2);
    let mut i = 0usize;
    while i < text.len() {
        // Safe to index bytewise: all chars are ASCII hex digits.
        let byte = u8::from_str_radix(&text[i..i + 2], 16).ok()?;
        out.push(byte);
        i += 2;
    }
    Some(out)
}
