use super::hex_ascii::HexOfAsciiCodec;
use super::smart;
use crate::constants::DATE_DIGITS;
use crate::types::{BlockData, CardDate};

/// Encode a date block: DDMMYYYY digits under the hex-of-ASCII transform.
/// Eight digits render to sixteen hex characters and fill the block
/// exactly.
pub fn encode_date(date: &CardDate) -> BlockData {
    HexOfAsciiCodec::encode(&date.to_digits())
}

/// Decode a date block to `DD-MM-YYYY`.
///
/// The stored text is decoded through the same heuristic as text fields,
/// then the first 8 characters are validated as digits and re-joined. Any
/// malformed content decodes to `""` rather than an error; an unreadable
/// date never fails a card read.
pub fn decode_date(block: &BlockData) -> String {
    let text = smart::smart_decode(block);
    let digits: Vec<char> = text.chars().take(DATE_DIGITS).collect();
    if digits.len() < DATE_DIGITS || !digits.iter().all(|c| c.is_ascii_digit()) {
        return String::new();
    }
    let s: String = digits.into_iter().collect();
    format!("{}-{}-{}", &s[..2], &s[2..4], &s[4..8])
}
