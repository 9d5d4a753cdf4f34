use log::debug;

use crate::Result;
use crate::card::IssueRequest;
use crate::card::session::TagSession;
use crate::codec::{HexOfAsciiCodec, encode_date};
use crate::constants::{CARD_TYPE_SECTOR, PRIMARY_SECTOR, SECONDARY_SECTOR};
use crate::tag::MifareTag;
use crate::types::CardField;

/// Issue a card: write every member field in sector/block order.
///
/// Sector 3 must authenticate before anything is written. A later sector
/// failing aborts the remainder, but blocks already written stay written
/// — partial writes are accepted, not rolled back.
pub fn write_card<T: MifareTag + ?Sized>(tag: &mut T, request: &IssueRequest) -> Result<()> {
    let mut session = TagSession::connect(tag)?;

    session.require_sector(PRIMARY_SECTOR)?;
    debug!("writing member id to block {}", CardField::MemberId.block());
    session.write_block(
        CardField::MemberId.block(),
        &HexOfAsciiCodec::encode(&request.member_id),
    )?;
    debug!("writing company to block {}", CardField::CompanyName.block());
    session.write_block(
        CardField::CompanyName.block(),
        &HexOfAsciiCodec::encode(&request.company_name),
    )?;
    debug!("writing valid-upto to block {}", CardField::ValidUpto.block());
    session.write_block(CardField::ValidUpto.block(), &encode_date(&request.valid_upto))?;

    session.require_sector(SECONDARY_SECTOR)?;
    debug!("writing total buy to block {}", CardField::TotalBuy.block());
    session.write_block(
        CardField::TotalBuy.block(),
        &HexOfAsciiCodec::encode(&request.total_buy),
    )?;
    debug!(
        "writing write date to block {}",
        CardField::LastWriteDate.block()
    );
    session.write_block(
        CardField::LastWriteDate.block(),
        &encode_date(&request.write_date),
    )?;
    debug!("writing password to block {}", CardField::Password.block());
    session.write_block(
        CardField::Password.block(),
        &HexOfAsciiCodec::encode(&request.password),
    )?;

    session.require_sector(CARD_TYPE_SECTOR)?;
    debug!("writing card type to block {}", CardField::CardType.block());
    session.write_block(
        CardField::CardType.block(),
        &HexOfAsciiCodec::encode(&request.card_type),
    )?;

    Ok(())
}
