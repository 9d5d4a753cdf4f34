#[path = "../common/mod.rs"]
mod common;

use common::fixtures;
use membercard::card::OpReport;
use membercard::card::operations::{read_card, write_card};
use membercard::card::ReadOutcome;
use membercard::codec::HexOfAsciiCodec;
use membercard::types::CardField;

#[test]
fn issue_then_read_roundtrip() {
    let mut tag = fixtures::blank_tag();
    let request = fixtures::sample_request();
    write_card(&mut tag, &request).unwrap();

    let data = match read_card(&mut tag).unwrap() {
        ReadOutcome::Data(d) => d,
        other => panic!("expected data, got {:?}", other),
    };
    assert_eq!(data.member_id, request.member_id);
    assert_eq!(data.company_name, request.company_name);
    assert_eq!(data.valid_upto, "28-02-2031");
    assert_eq!(data.total_buy.as_deref(), Some(request.total_buy.as_str()));
    assert_eq!(data.last_buy_date.as_deref(), Some("05-08-2026"));
    assert_eq!(data.password.as_deref(), Some(request.password.as_str()));
    assert_eq!(data.card_type.as_deref(), Some(request.card_type.as_str()));
}

#[test]
fn issued_blocks_use_the_current_encoding() {
    let mut tag = fixtures::blank_tag();
    write_card(&mut tag, &fixtures::sample_request()).unwrap();
    assert_eq!(
        tag.block(CardField::CompanyName.block()),
        HexOfAsciiCodec::encode("NORD")
    );
}

#[test]
fn long_member_id_truncates_to_eight_chars() {
    let mut tag = fixtures::blank_tag();
    let mut request = fixtures::sample_request();
    request.member_id = "MEMBER12345".to_string();
    write_card(&mut tag, &request).unwrap();

    match read_card(&mut tag).unwrap() {
        ReadOutcome::Data(data) => assert_eq!(data.member_id, "MEMBER12"),
        other => panic!("expected data, got {:?}", other),
    }
}

#[test]
fn write_report_messages() {
    let mut tag = fixtures::blank_tag();
    let report = OpReport::from_write(write_card(&mut tag, &fixtures::sample_request()));
    assert!(report.success);
    assert_eq!(report.message, "Data written successfully");

    let mut tag = fixtures::blank_tag();
    tag.deny_sector(4);
    let report = OpReport::from_write(write_card(&mut tag, &fixtures::sample_request()));
    assert!(!report.success);
    assert_eq!(report.message, "Authentication failed for Sector 4");
}

#[test]
fn partial_write_is_not_rolled_back() {
    let mut tag = fixtures::blank_tag();
    tag.deny_sector(5);
    assert!(write_card(&mut tag, &fixtures::sample_request()).is_err());
    // Sectors 3 and 4 landed and stay.
    for block in [12, 13, 14, 16, 17, 18] {
        assert!(!tag.block(block).is_zeroed(), "block {} missing", block);
    }
    assert!(tag.block(20).is_zeroed());
}
