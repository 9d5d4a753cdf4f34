// membercard/src/codec/mod.rs

//! Block-level value codecs.
//!
//! Two stored representations coexist in the field because the schema
//! evolved from raw ASCII text to hex-of-ASCII digits. Writing always uses
//! [`HexOfAsciiCodec`]; reading goes through [`smart_decode`], which
//! accepts both. Neither representation is negotiable: cards already
//! issued must keep decoding bit-for-bit.

mod date;
mod hex_ascii;
mod raw_ascii;
pub mod smart;

pub use date::{decode_date, encode_date};
pub use hex_ascii::HexOfAsciiCodec;
pub use raw_ascii::RawAsciiCodec;
pub use smart::{Decoded, Encoding, smart_decode};
