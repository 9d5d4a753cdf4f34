use membercard::codec::{RawAsciiCodec, decode_date, encode_date};
use membercard::types::{BlockData, CardDate};

#[test]
fn date_roundtrip_current_encoding() {
    let date = CardDate::new(28, 2, 2031).unwrap();
    let block = encode_date(&date);
    assert_eq!(decode_date(&block), "28-02-2031");
}

#[test]
fn encoded_date_fills_the_block() {
    // 8 digits -> 16 hex characters, no padding left over.
    let block = encode_date(&CardDate::new(1, 1, 2000).unwrap());
    assert!(block.as_bytes().iter().all(|&b| b != 0));
}

#[test]
fn legacy_digit_date_decodes() {
    let block = RawAsciiCodec::encode("28022031");
    assert_eq!(decode_date(&block), "28-02-2031");
}

#[test]
fn malformed_dates_decode_to_empty_string() {
    for stored in ["28-02-31", "2802", "280220XX", "GOLD"] {
        let block = RawAsciiCodec::encode(stored);
        assert_eq!(decode_date(&block), "", "stored {:?}", stored);
    }
    assert_eq!(decode_date(&BlockData::zeroed()), "");
}

#[test]
fn day_and_month_keep_leading_zeroes() {
    let date = CardDate::new(5, 8, 2026).unwrap();
    assert_eq!(decode_date(&encode_date(&date)), "05-08-2026");
    assert_eq!(date.to_string(), "05-08-2026");
}
