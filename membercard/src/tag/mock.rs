// membercard/src/tag/mock.rs

use std::collections::HashMap;

use super::traits::MifareTag;
use crate::constants::{BLOCKS_PER_SECTOR, SECTOR_COUNT};
use crate::types::{BlockData, SectorKey};
use crate::{Error, Result};

const TOTAL_BLOCKS: usize = (SECTOR_COUNT * BLOCKS_PER_SECTOR) as usize;

/// Mock tag for unit tests. It serves blocks from an in-memory 1K image
/// and records every driver call for assertions.
#[derive(Debug, Clone)]
pub struct MockTag {
    uid: Vec<u8>,
    blocks: Vec<[u8; 16]>,
    /// Key A accepted per sector; sectors absent from the map reject every
    /// key.
    pub keys: HashMap<u8, SectorKey>,
    connected: bool,
    /// Testing hook: fail the next connect() with this I/O message.
    pub connect_error: Option<String>,
    /// Testing hook: blocks whose read/write fails with an I/O error.
    pub broken_blocks: Vec<u8>,
    /// Record of (sector, key) for every authenticate call, in order.
    pub auth_attempts: Vec<(u8, SectorKey)>,
    /// Record of every block write.
    pub writes: Vec<(u8, BlockData)>,
    /// Number of close() calls observed.
    pub close_calls: usize,
}

impl MockTag {
    /// A factory-fresh tag: zeroed image, every sector accepting the
    /// default key.
    pub fn new(uid: &[u8]) -> Self {
        let keys = (0..SECTOR_COUNT).map(|s| (s, SectorKey::DEFAULT)).collect();
        Self {
            uid: uid.to_vec(),
            blocks: vec![[0u8; 16]; TOTAL_BLOCKS],
            keys,
            connected: false,
            connect_error: None,
            broken_blocks: Vec::new(),
            auth_attempts: Vec::new(),
            writes: Vec::new(),
            close_calls: 0,
        }
    }

    /// Builder-style: accept only `key` for `sector`.
    pub fn with_key(mut self, sector: u8, key: SectorKey) -> Self {
        self.keys.insert(sector, key);
        self
    }

    /// Make a sector reject both known keys.
    pub fn deny_sector(&mut self, sector: u8) {
        self.keys.remove(&sector);
    }

    /// Seed a block of the image directly, bypassing connect/auth.
    pub fn set_block(&mut self, block: u8, data: BlockData) {
        self.blocks[block as usize] = *data.as_bytes();
    }

    /// Inspect a block of the image directly.
    pub fn block(&self, block: u8) -> BlockData {
        BlockData::from_bytes(self.blocks[block as usize])
    }
}

impl MifareTag for MockTag {
    fn uid(&self) -> &[u8] {
        &self.uid
    }

    fn connect(&mut self) -> Result<()> {
        if let Some(msg) = self.connect_error.take() {
            return Err(Error::Io(msg));
        }
        self.connected = true;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.close_calls += 1;
        self.connected = false;
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn authenticate(&mut self, sector: u8, key: &SectorKey) -> Result<bool> {
        if !self.connected {
            return Err(Error::Io("tag not connected".to_string()));
        }
        self.auth_attempts.push((sector, *key));
        Ok(self.keys.get(&sector) == Some(key))
    }

    fn read_block(&mut self, block: u8) -> Result<BlockData> {
        if !self.connected {
            return Err(Error::Io("tag not connected".to_string()));
        }
        if self.broken_blocks.contains(&block) {
            return Err(Error::Io(format!("read failed at block {}", block)));
        }
        let idx = block as usize;
        if idx >= TOTAL_BLOCKS {
            return Err(Error::InvalidBlock(block));
        }
        Ok(BlockData::from_bytes(self.blocks[idx]))
    }

    fn write_block(&mut self, block: u8, data: &BlockData) -> Result<()> {
        if !self.connected {
            return Err(Error::Io("tag not connected".to_string()));
        }
        if self.broken_blocks.contains(&block) {
            return Err(Error::Io(format!("write failed at block {}", block)));
        }
        let idx = block as usize;
        if idx >= TOTAL_BLOCKS {
            return Err(Error::InvalidBlock(block));
        }
        self.writes.push((block, *data));
        self.blocks[idx] = *data.as_bytes();
        Ok(())
    }
}
