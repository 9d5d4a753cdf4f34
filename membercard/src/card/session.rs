// membercard/src/card/session.rs

use log::{debug, warn};

use crate::constants::BLOCKS_PER_SECTOR;
use crate::tag::MifareTag;
use crate::types::{BlockData, SectorKey};
use crate::{Error, Result};

/// An open connection to a presented tag.
///
/// Construction connects; Drop closes, best effort, on every exit path —
/// success, partial, or failure — so a completion callback observed by
/// the caller never races a live connection. Close errors are logged and
/// never re-raised.
pub struct TagSession<'a, T: MifareTag + ?Sized> {
    tag: &'a mut T,
}

impl<'a, T: MifareTag + ?Sized> TagSession<'a, T> {
    /// Open a session to the physical tag.
    pub fn connect(tag: &'a mut T) -> Result<Self> {
        tag.connect()?;
        debug!(
            "tag connected, uid={}",
            crate::utils::bytes_to_hex_upper(tag.uid())
        );
        Ok(Self { tag })
    }

    /// Tag UID as uppercase hex without separators, the `card_mfid` form.
    pub fn uid_hex(&self) -> String {
        crate::utils::bytes_to_hex_upper(self.tag.uid())
    }

    /// Gain access to a sector: try key A = default, then key A = NFC
    /// Forum. `Ok(false)` when both were rejected; no third key is tried.
    ///
    /// Virgin cards carry the default key, cards formatted by NFC tools
    /// the NFC Forum key; between them that covers the cards met in the
    /// field.
    pub fn authenticate_sector(&mut self, sector: u8) -> Result<bool> {
        for key in SectorKey::FALLBACK_CHAIN {
            if self.tag.authenticate(sector, &key)? {
                debug!("sector {} authenticated", sector);
                return Ok(true);
            }
        }
        debug!("authentication failed for sector {} with all known keys", sector);
        Ok(false)
    }

    /// Like [`authenticate_sector`](Self::authenticate_sector), but a
    /// rejection is terminal for the operation.
    pub fn require_sector(&mut self, sector: u8) -> Result<()> {
        if self.authenticate_sector(sector)? {
            Ok(())
        } else {
            Err(Error::SectorAuthFailed { sector })
        }
    }

    /// Read one block of the currently authenticated sector.
    pub fn read_block(&mut self, block: u8) -> Result<BlockData> {
        self.tag.read_block(block)
    }

    /// Write one block. The manufacturer block and sector trailers are
    /// never writable through a session; clobbering a trailer would
    /// change the sector's keys.
    pub fn write_block(&mut self, block: u8, data: &BlockData) -> Result<()> {
        if block == 0 || block % BLOCKS_PER_SECTOR == BLOCKS_PER_SECTOR - 1 {
            return Err(Error::InvalidBlock(block));
        }
        self.tag.write_block(block, data)
    }
}

impl<T: MifareTag + ?Sized> Drop for TagSession<'_, T> {
    fn drop(&mut self) {
        if self.tag.is_connected() {
            if let Err(e) = self.tag.close() {
                warn!("error closing tag: {}", e);
            }
        }
    }
}
