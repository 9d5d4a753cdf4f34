#[path = "../common/mod.rs"]
mod common;

use common::fixtures::block_from_hex;
use membercard::codec::{Encoding, HexOfAsciiCodec, smart, smart_decode};

#[test]
fn digit_text_block_decodes_to_literal_digits() {
    // Block dump "31 30 31 30 00 ..." is the text "1010". Hex-decoding
    // that text yields control bytes, so the heuristic returns the
    // literal digit string instead of the hex-of-hex value.
    let block = block_from_hex("31 30 31 30 00 00 00 00");
    let decoded = smart::decode(&block);
    assert_eq!(decoded.value, "1010");
    assert_eq!(decoded.encoding, Encoding::RawAscii);
}

#[test]
fn hex_of_ascii_member_id_decodes_cleanly() {
    let block = HexOfAsciiCodec::encode("MEMBER1");
    let decoded = smart::decode(&block);
    assert_eq!(decoded.value, "MEMBER1");
    assert_eq!(decoded.encoding, Encoding::HexOfAscii);
}

#[test]
fn digit_rendering_stops_at_first_zero_pair() {
    // "10 10 00 10" as text: the 00 pair terminates the recovered digits.
    let block = block_from_hex("31 30 31 30 30 30 31 30");
    assert_eq!(smart_decode(&block), "1010");
}

#[test]
fn non_hex_text_is_returned_as_is() {
    let block = block_from_hex("4D 45 4D 42 45 52 31"); // "MEMBER1"
    assert_eq!(smart_decode(&block), "MEMBER1");
}

#[test]
fn all_zero_block_is_blank() {
    let block = block_from_hex("00 00 00 00 00 00 00 00");
    assert_eq!(smart_decode(&block), "");
}

#[test]
fn zero_pair_text_is_blank() {
    // The text "0000000000000000" strips to nothing after zero-byte pairs.
    let block = block_from_hex("30 30 30 30 30 30 30 30 30 30 30 30 30 30 30 30");
    assert_eq!(smart_decode(&block), "");
}
