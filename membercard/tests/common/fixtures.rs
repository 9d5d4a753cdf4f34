// fixtures.rs — provides commonly used tags, requests and block images
#![allow(dead_code)]

use membercard::card::IssueRequest;
use membercard::codec::{HexOfAsciiCodec, RawAsciiCodec, encode_date};
use membercard::tag::mock::MockTag;
use membercard::types::{BlockData, CardDate, CardField, SectorKey};

pub fn sample_uid() -> [u8; 4] {
    [0x04, 0xA1, 0xB2, 0xC3]
}

pub fn sample_uid_hex() -> &'static str {
    "04A1B2C3"
}

pub fn blank_tag() -> MockTag {
    MockTag::new(&sample_uid())
}

pub fn sample_request() -> IssueRequest {
    IssueRequest {
        member_id: "MEMBER1".to_string(),
        company_name: "NORD".to_string(),
        password: "pw999".to_string(),
        valid_upto: CardDate::new(28, 2, 2031).unwrap(),
        total_buy: "2500".to_string(),
        card_type: "SILVER".to_string(),
        write_date: CardDate::new(5, 8, 2026).unwrap(),
    }
}

/// A card issued by the current writer.
pub fn issued_tag() -> MockTag {
    let mut tag = blank_tag();
    let r = sample_request();
    tag.set_block(CardField::MemberId.block(), HexOfAsciiCodec::encode(&r.member_id));
    tag.set_block(
        CardField::CompanyName.block(),
        HexOfAsciiCodec::encode(&r.company_name),
    );
    tag.set_block(CardField::ValidUpto.block(), encode_date(&r.valid_upto));
    tag.set_block(CardField::TotalBuy.block(), HexOfAsciiCodec::encode(&r.total_buy));
    tag.set_block(CardField::LastWriteDate.block(), encode_date(&r.write_date));
    tag.set_block(CardField::Password.block(), HexOfAsciiCodec::encode(&r.password));
    tag.set_block(CardField::CardType.block(), HexOfAsciiCodec::encode(&r.card_type));
    tag
}

/// A card written by the oldest app generation: plain ASCII values,
/// NFC-Forum keys applied by the formatting tool.
pub fn legacy_ascii_tag() -> MockTag {
    let mut tag = blank_tag();
    for sector in 0..16 {
        tag.keys.insert(sector, SectorKey::NFC_FORUM);
    }
    tag.set_block(CardField::MemberId.block(), RawAsciiCodec::encode("1010"));
    tag.set_block(CardField::CompanyName.block(), RawAsciiCodec::encode("NORD"));
    tag.set_block(CardField::ValidUpto.block(), RawAsciiCodec::encode("28022031"));
    tag.set_block(CardField::TotalBuy.block(), RawAsciiCodec::encode("750"));
    tag.set_block(
        CardField::LastWriteDate.block(),
        RawAsciiCodec::encode("05081999"),
    );
    tag.set_block(CardField::Password.block(), RawAsciiCodec::encode("oldpw"));
    tag.set_block(CardField::CardType.block(), RawAsciiCodec::encode("BASIC"));
    tag
}

/// Build a block from a spaced hex dump, zero-padded to 16 bytes.
pub fn block_from_hex(dump: &str) -> BlockData {
    let mut bytes = hex::decode(dump.replace(' ', "")).unwrap();
    bytes.resize(16, 0);
    BlockData::try_from(bytes.as_slice()).unwrap()
}
