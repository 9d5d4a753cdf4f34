//! End-to-end demo against an in-memory tag: issue a card, read it back,
//! clear it, and show the blank-card short circuit.
//!
//! Run with: cargo run -p membercard --example issue_and_read

use anyhow::Result;
use membercard::card::operations::{clear_card, read_card, write_card};
use membercard::card::worker::read_in_background;
use membercard::card::{IssueRequest, OpReport};
use membercard::tag::mock::MockTag;
use membercard::types::CardDate;

fn main() -> Result<()> {
    env_logger::init();

    let mut tag = MockTag::new(&[0x04, 0xA1, 0xB2, 0xC3]);

    let request = IssueRequest {
        member_id: "MEMBER1".to_string(),
        company_name: "NORD".to_string(),
        password: "pw999".to_string(),
        valid_upto: CardDate::new(28, 2, 2031)?,
        total_buy: "2500".to_string(),
        card_type: "SILVER".to_string(),
        write_date: CardDate::new(5, 8, 2026)?,
    };

    let report = OpReport::from_write(write_card(&mut tag, &request));
    println!("write: {} ({})", report.success, report.message);

    let report = OpReport::from_read(read_card(&mut tag));
    println!("read:  {} ({})", report.success, report.message);
    if let Some(data) = report.data {
        for (key, value) in data.to_map() {
            println!("  {key}: {value}");
        }
    }

    let report = OpReport::from_clear(clear_card(&mut tag));
    println!("clear: {} ({})", report.success, report.message);

    // A fresh worker per user action; the report arrives after the tag
    // connection has been released.
    let report = read_in_background(tag).recv()?;
    println!("re-read: {} ({})", report.success, report.message);

    Ok(())
}
