use crate::constants::BLOCK_LEN;
use crate::types::BlockData;

/// Legacy plain-text representation: the 16 block bytes are the value's
/// ASCII bytes, zero-padded.
pub struct RawAsciiCodec;

impl RawAsciiCodec {
    /// Copy the value's bytes into a block, truncating at 16 and padding
    /// with NUL.
    pub fn encode(value: &str) -> BlockData {
        let mut block = [0u8; BLOCK_LEN];
        for (dst, src) in block.iter_mut().zip(value.bytes()) {
            *dst = src;
        }
        BlockData::from_bytes(block)
    }

    /// Block bytes as text, trimmed of NUL padding and surrounding
    /// whitespace/control characters (everything at or below space).
    pub fn decode(block: &BlockData) -> String {
        let text: String = block.as_bytes().iter().map(|&b| b as char).collect();
        text.trim_matches(|c: char| c <= ' ').to_string()
    }
}
