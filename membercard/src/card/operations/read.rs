use log::{debug, warn};

use crate::Result;
use crate::card::session::TagSession;
use crate::card::{CardData, ReadOutcome};
use crate::codec::{decode_date, smart_decode};
use crate::constants::{CARD_TYPE_SECTOR, PRIMARY_SECTOR, SECONDARY_SECTOR};
use crate::tag::MifareTag;
use crate::types::CardField;

/// Read the member fields off a presented card.
///
/// Sector 3 must authenticate or the whole read fails. An empty member-id
/// block short-circuits as [`ReadOutcome::Blank`] without touching the
/// remaining sectors. Sectors 4 and 5 are optional: a rejection there is
/// logged and the primary fields are returned as partial data.
pub fn read_card<T: MifareTag + ?Sized>(tag: &mut T) -> Result<ReadOutcome> {
    let mut session = TagSession::connect(tag)?;
    let mut data = CardData {
        card_mfid: session.uid_hex(),
        ..Default::default()
    };

    session.require_sector(PRIMARY_SECTOR)?;

    let member_block = session.read_block(CardField::MemberId.block())?;
    debug!("block 12 raw: {}", member_block.to_hex());
    let member_id = smart_decode(&member_block);
    if member_id.is_empty() {
        debug!("member-id block is empty: blank card");
        return Ok(ReadOutcome::Blank);
    }
    data.member_id = member_id;
    data.company_name = smart_decode(&session.read_block(CardField::CompanyName.block())?);
    data.valid_upto = decode_date(&session.read_block(CardField::ValidUpto.block())?);

    if session.authenticate_sector(SECONDARY_SECTOR)? {
        data.total_buy = Some(smart_decode(&session.read_block(CardField::TotalBuy.block())?));
        data.last_buy_date = Some(decode_date(
            &session.read_block(CardField::LastWriteDate.block())?,
        ));
        data.password = Some(smart_decode(&session.read_block(CardField::Password.block())?));
    } else {
        warn!(
            "sector {} authentication failed, returning partial data",
            SECONDARY_SECTOR
        );
    }

    if session.authenticate_sector(CARD_TYPE_SECTOR)? {
        data.card_type = Some(smart_decode(&session.read_block(CardField::CardType.block())?));
    } else {
        warn!(
            "sector {} authentication failed, card type unavailable",
            CARD_TYPE_SECTOR
        );
    }

    Ok(ReadOutcome::Data(data))
}
