// membercard/src/prelude.rs

pub use crate::card::operations::{clear_card, read_card, write_card};
pub use crate::card::worker::{
    clear_in_background, read_in_background, spawn_clear, spawn_read, spawn_write,
    write_in_background,
};
pub use crate::card::{CardData, IssueRequest, OpReport, ReadOutcome};
pub use crate::codec::{
    Decoded, Encoding, HexOfAsciiCodec, RawAsciiCodec, decode_date, encode_date, smart_decode,
};
pub use crate::tag::MifareTag;
pub use crate::tag::detect::{CancelHandle, ScanSession, TagSink, scan_channel};
pub use crate::{BlockData, CardDate, CardField, Error, Result, SectorKey, Uid};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex_spaced, bytes_to_hex_upper, default_scan_timeout, ms, parse_hex};
