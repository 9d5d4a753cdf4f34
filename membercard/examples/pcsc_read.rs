//! Read a membership card presented on the first PC/SC reader.
//!
//! Run with: cargo run -p membercard --example pcsc_read --features pcsc

use anyhow::{Context, Result, bail};
use membercard::card::OpReport;
use membercard::card::operations::read_card;
use membercard::tag::pcsc::PcscTag;

fn main() -> Result<()> {
    env_logger::init();

    let ctx = pcsc::Context::establish(pcsc::Scope::User)
        .context("establishing PC/SC context")?;
    let mut readers_buf = [0u8; 2048];
    let mut readers = ctx.list_readers(&mut readers_buf)?;
    let Some(reader) = readers.next() else {
        bail!("no PC/SC readers connected");
    };
    println!("using reader: {:?}", reader);

    let card = ctx
        .connect(reader, pcsc::ShareMode::Shared, pcsc::Protocols::ANY)
        .context("connecting to card (is one presented?)")?;
    let mut tag = PcscTag::new(card)?;

    let report = OpReport::from_read(read_card(&mut tag));
    println!("{} ({})", report.success, report.message);
    if let Some(data) = report.data {
        for (key, value) in data.to_map() {
            println!("  {key}: {value}");
        }
    }
    Ok(())
}
