// membercard/src/tag/traits.rs

use crate::Result;
use crate::types::{BlockData, SectorKey};

/// MifareTag trait abstracts the platform NFC driver away from codec and
/// operation logic.
///
/// One adapter per platform implements this against the native library;
/// the card operations depend only on this interface, never on a concrete
/// driver type.
pub trait MifareTag {
    /// Raw UID bytes reported when the tag was detected (4 to 10 bytes).
    fn uid(&self) -> &[u8];

    /// Open a session to the physical tag.
    fn connect(&mut self) -> Result<()>;

    /// Close the session. Safe to call when already closed.
    fn close(&mut self) -> Result<()>;

    /// Whether a session is currently open.
    fn is_connected(&self) -> bool;

    /// Authenticate one sector with key A. `Ok(false)` means the key was
    /// rejected; `Err` is a driver/transport failure.
    fn authenticate(&mut self, sector: u8, key: &SectorKey) -> Result<bool>;

    /// Read one 16-byte block.
    fn read_block(&mut self, block: u8) -> Result<BlockData>;

    /// Write one 16-byte block.
    fn write_block(&mut self, block: u8, data: &BlockData) -> Result<()>;
}

impl<T: MifareTag + ?Sized> MifareTag for Box<T> {
    fn uid(&self) -> &[u8] {
        (**self).uid()
    }

    fn connect(&mut self) -> Result<()> {
        (**self).connect()
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }

    fn is_connected(&self) -> bool {
        (**self).is_connected()
    }

    fn authenticate(&mut self, sector: u8, key: &SectorKey) -> Result<bool> {
        (**self).authenticate(sector, key)
    }

    fn read_block(&mut self, block: u8) -> Result<BlockData> {
        (**self).read_block(block)
    }

    fn write_block(&mut self, block: u8, data: &BlockData) -> Result<()> {
        (**self).write_block(block, data)
    }
}
