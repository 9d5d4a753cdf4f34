//! Heuristic decoding for blocks whose encoding generation is unknown.
//!
//! Cards written by older app versions stored values as raw ASCII, newer
//! ones as hex-of-ASCII digits, and one legacy writer hex-parsed numeric
//! member ids outright. No version marker exists on the card, so the
//! reader infers the representation from content. The thresholds below are
//! compatibility targets for cards already in circulation, not tunables.

use super::hex_ascii::hex_pairs;
use super::raw_ascii::RawAsciiCodec;
use crate::types::BlockData;

/// Stored representation a decode resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Block text was hex digits carrying the payload.
    HexOfAscii,
    /// Block text was the payload itself.
    RawAscii,
}

/// A decoded field value and the representation it was read under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// Recovered field value; empty for blank blocks.
    pub value: String,
    /// Representation the heuristic settled on.
    pub encoding: Encoding,
}

/// Decode a text-field block, accepting both stored representations.
///
/// Policy, in order: hex-decode the trimmed block text; if the text is
/// not well-formed hex it is a legacy raw-ASCII value and is returned
/// as-is; if the decoded bytes (cut at the first `0x00`) contain a
/// control character below 32, the digits themselves were the value
/// (legacy numeric ids), so the bytes are re-rendered as hex digits;
/// otherwise the decoded characters are the value.
pub fn decode(block: &BlockData) -> Decoded {
    let raw = RawAsciiCodec::decode(block);
    if raw.is_empty() {
        return Decoded {
            value: String::new(),
            encoding: Encoding::RawAscii,
        };
    }

    let Some(bytes) = hex_pairs(&raw) else {
        // Not hex at all: an old card carrying the value as plain text.
        return Decoded {
            value: raw,
            encoding: Encoding::RawAscii,
        };
    };

    let payload: Vec<u8> = bytes.into_iter().take_while(|&b| b != 0).collect();
    if payload.is_empty() {
        // Only zero pairs: nothing stored.
        return Decoded {
            value: String::new(),
            encoding: Encoding::HexOfAscii,
        };
    }

    if payload.iter().any(|&b| b < 0x20) {
        // Decoded to non-printable garbage, so the block was never
        // hex-of-ASCII: reconstruct the literal digit string the writer
        // stored. The threshold is exactly 32; bytes at or above 0x7F
        // pass, matching readers already in the field.
        let mut digits = String::with_capacity(payload.len() * 2);
        for b in payload {
            use std::fmt::Write;
            let _ = write!(&mut digits, "{:02X}", b);
        }
        return Decoded {
            value: digits,
            encoding: Encoding::RawAscii,
        };
    }

    Decoded {
        value: payload.into_iter().map(|b| b as char).collect(),
        encoding: Encoding::HexOfAscii,
    }
}

/// Convenience wrapper returning only the recovered value.
pub fn smart_decode(block: &BlockData) -> String {
    decode(block).value
}
