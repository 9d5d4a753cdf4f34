//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTag setup so tests across the
//! crate and tests/ directory can reuse the same card images.
#![allow(dead_code)]

use crate::card::IssueRequest;
use crate::codec::{HexOfAsciiCodec, RawAsciiCodec, encode_date};
use crate::tag::mock::MockTag;
use crate::types::{CardDate, CardField, SectorKey};

/// UID used by most tests; renders as "DEADBEEF".
pub const TEST_UID: [u8; 4] = [0xDE, 0xAD, 0xBE, 0xEF];

/// A factory-fresh tag: zeroed image, default key everywhere.
#[doc(hidden)]
pub fn blank_tag() -> MockTag {
    MockTag::new(&TEST_UID)
}

/// The request matching [`issued_tag`]'s contents.
#[doc(hidden)]
pub fn sample_request() -> IssueRequest {
    IssueRequest {
        member_id: "MEM1".to_string(),
        company_name: "ACME".to_string(),
        password: "pw123".to_string(),
        valid_upto: CardDate::new(31, 12, 2030).unwrap(),
        total_buy: "1500".to_string(),
        card_type: "GOLD".to_string(),
        write_date: CardDate::new(1, 6, 2025).unwrap(),
    }
}

/// MockTag pre-loaded with a fully issued card in the current
/// (hex-of-ASCII) encoding.
#[doc(hidden)]
pub fn issued_tag() -> MockTag {
    let mut tag = blank_tag();
    tag.set_block(CardField::MemberId.block(), HexOfAsciiCodec::encode("MEM1"));
    tag.set_block(CardField::CompanyName.block(), HexOfAsciiCodec::encode("ACME"));
    tag.set_block(
        CardField::ValidUpto.block(),
        encode_date(&CardDate::new(31, 12, 2030).unwrap()),
    );
    tag.set_block(CardField::TotalBuy.block(), HexOfAsciiCodec::encode("1500"));
    tag.set_block(
        CardField::LastWriteDate.block(),
        encode_date(&CardDate::new(1, 6, 2025).unwrap()),
    );
    tag.set_block(CardField::Password.block(), HexOfAsciiCodec::encode("pw123"));
    tag.set_block(CardField::CardType.block(), HexOfAsciiCodec::encode("GOLD"));
    tag
}

/// MockTag holding a card written by the legacy raw-ASCII encoder,
/// including a plain-digit member id and an NFC-Forum formatted key set.
#[doc(hidden)]
pub fn legacy_tag() -> MockTag {
    let mut tag = MockTag::new(&TEST_UID);
    for sector in 0..16 {
        tag.keys.insert(sector, SectorKey::NFC_FORUM);
    }
    tag.set_block(CardField::MemberId.block(), RawAsciiCodec::encode("1010"));
    tag.set_block(CardField::CompanyName.block(), RawAsciiCodec::encode("ACME"));
    tag.set_block(CardField::ValidUpto.block(), RawAsciiCodec::encode("31122026"));
    tag.set_block(CardField::TotalBuy.block(), RawAsciiCodec::encode("200"));
    tag.set_block(
        CardField::LastWriteDate.block(),
        RawAsciiCodec::encode("01011999"),
    );
    tag.set_block(CardField::Password.block(), RawAsciiCodec::encode("secret"));
    tag.set_block(CardField::CardType.block(), RawAsciiCodec::encode("BASIC"));
    tag
}
