use membercard::codec::{HexOfAsciiCodec, RawAsciiCodec, smart_decode};

#[test]
fn hex_of_ascii_roundtrips_short_values() {
    for value in ["A", "42", "MEMBER1", "ABCDEFGH", "pw123", "20000"] {
        let block = HexOfAsciiCodec::encode(value);
        assert_eq!(
            HexOfAsciiCodec::decode(&block).unwrap(),
            value,
            "hex-of-ascii roundtrip failed for {:?}",
            value
        );
    }
}

#[test]
fn raw_ascii_roundtrips_short_values() {
    for value in ["A", "42", "MEMBER1", "sixteen chars ok"] {
        let block = RawAsciiCodec::encode(value);
        assert_eq!(
            RawAsciiCodec::decode(&block),
            value,
            "raw-ascii roundtrip failed for {:?}",
            value
        );
    }
}

#[test]
fn hex_of_ascii_truncates_past_eight_chars() {
    let block = HexOfAsciiCodec::encode("MEMBER123456");
    assert_eq!(HexOfAsciiCodec::decode(&block).unwrap(), "MEMBER12");
}

#[test]
fn smart_decode_accepts_both_representations() {
    for value in ["MEMBER1", "GOLD", "pw123"] {
        assert_eq!(smart_decode(&HexOfAsciiCodec::encode(value)), value);
        assert_eq!(smart_decode(&RawAsciiCodec::encode(value)), value);
    }
}

#[test]
fn stored_form_is_hex_digit_text() {
    // The wire contract: "MEM1" is stored as the ASCII digits of its hex
    // rendering, not as its payload bytes.
    let block = HexOfAsciiCodec::encode("MEM1");
    assert_eq!(&block.as_bytes()[..8], b"4D454D31");
}
