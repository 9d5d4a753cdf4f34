#![cfg(feature = "pcsc")]

use serial_test::serial;

use membercard::Result;
use membercard::card::OpReport;
use membercard::card::operations::read_card;
use membercard::tag::pcsc::PcscTag;

// This integration test requires a real PC/SC reader with a MIFARE
// Classic card presented. It is marked `#[ignore]` so CI does not attempt
// to run it. Run manually with:
//
// cargo test -p membercard --test hardware --features pcsc -- --ignored

fn presented_tag() -> Result<Option<PcscTag>> {
    let ctx = pcsc::Context::establish(pcsc::Scope::User)?;
    let mut readers_buf = [0u8; 2048];
    let mut readers = ctx.list_readers(&mut readers_buf)?;
    let Some(reader) = readers.next() else {
        return Ok(None);
    };
    let card = ctx.connect(reader, pcsc::ShareMode::Shared, pcsc::Protocols::ANY)?;
    Ok(Some(PcscTag::new(card)?))
}

#[test]
#[ignore]
#[serial]
fn read_presented_card() -> Result<()> {
    let Some(mut tag) = presented_tag()? else {
        return Ok(());
    };
    let report = OpReport::from_read(read_card(&mut tag));
    println!("{}: {:?}", report.message, report.data);
    assert!(report.success);
    Ok(())
}
