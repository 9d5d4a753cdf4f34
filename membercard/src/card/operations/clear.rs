use log::debug;

use crate::Result;
use crate::card::session::TagSession;
use crate::constants::{PRIMARY_SECTOR, SECONDARY_SECTOR};
use crate::tag::MifareTag;
use crate::types::{BlockData, CardField};

/// Revoke a card by zeroing the member blocks in sectors 3 and 4.
///
/// The card type (sector 5) is left in place. Sector order matters: a
/// sector-4 rejection leaves sector 3 already zeroed — no rollback, the
/// card then reads as blank.
pub fn clear_card<T: MifareTag + ?Sized>(tag: &mut T) -> Result<()> {
    let mut session = TagSession::connect(tag)?;
    let zero = BlockData::zeroed();

    session.require_sector(PRIMARY_SECTOR)?;
    debug!("clearing sector {}", PRIMARY_SECTOR);
    for field in [CardField::MemberId, CardField::CompanyName, CardField::ValidUpto] {
        session.write_block(field.block(), &zero)?;
    }

    session.require_sector(SECONDARY_SECTOR)?;
    debug!("clearing sector {}", SECONDARY_SECTOR);
    for field in [CardField::TotalBuy, CardField::LastWriteDate, CardField::Password] {
        session.write_block(field.block(), &zero)?;
    }

    Ok(())
}
