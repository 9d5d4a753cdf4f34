// membercard/src/tag/pcsc.rs

//! PC/SC adapter for ACR122-class contact-less readers.
//!
//! Drives MIFARE Classic access through the reader's pseudo-APDUs: load
//! key into volatile slot 0, general authenticate with key A, read/update
//! binary. Only compiled with the `pcsc` feature; everything above the
//! [`MifareTag`] trait stays driver-free.

use pcsc::{Card, MAX_BUFFER_SIZE};

use super::traits::MifareTag;
use crate::constants::{BLOCK_LEN, BLOCKS_PER_SECTOR};
use crate::types::{BlockData, SectorKey, Uid};
use crate::{Error, Result};

const KEY_A: u8 = 0x60;

/// A MIFARE Classic tag presented on a PC/SC reader.
pub struct PcscTag {
    card: Card,
    uid: Uid,
    connected: bool,
}

impl PcscTag {
    /// Wrap an already-connected PC/SC card handle, fetching its UID.
    pub fn new(card: Card) -> Result<Self> {
        let uid_bytes = transmit(&card, &[0xFF, 0xCA, 0x00, 0x00, 0x00])?;
        let uid = Uid::from_bytes(&uid_bytes)?;
        Ok(Self {
            card,
            uid,
            connected: false,
        })
    }
}

/// Exchange one APDU, failing unless the status word is 90 00.
fn transmit(card: &Card, apdu: &[u8]) -> Result<Vec<u8>> {
    let mut buf = [0u8; MAX_BUFFER_SIZE];
    let resp = card.transmit(apdu, &mut buf)?;
    if resp.len() < 2 {
        return Err(Error::Io("short APDU response".to_string()));
    }
    let (sw1, sw2) = (resp[resp.len() - 2], resp[resp.len() - 1]);
    if sw1 != 0x90 || sw2 != 0x00 {
        return Err(Error::Io(format!("APDU status {:02X} {:02X}", sw1, sw2)));
    }
    Ok(resp[..resp.len() - 2].to_vec())
}

/// Like [`transmit`] but a non-success status word is a clean `false`
/// (key rejected) instead of an error.
fn transmit_accepted(card: &Card, apdu: &[u8]) -> Result<bool> {
    let mut buf = [0u8; MAX_BUFFER_SIZE];
    let resp = card.transmit(apdu, &mut buf)?;
    if resp.len() < 2 {
        return Err(Error::Io("short APDU response".to_string()));
    }
    let (sw1, sw2) = (resp[resp.len() - 2], resp[resp.len() - 1]);
    Ok(sw1 == 0x90 && sw2 == 0x00)
}

impl MifareTag for PcscTag {
    fn uid(&self) -> &[u8] {
        self.uid.as_bytes()
    }

    fn connect(&mut self) -> Result<()> {
        // The PC/SC handle is connected at construction; this marks the
        // session open for the operation layer.
        self.connected = true;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        // Disconnecting the reader consumes the pcsc handle, which happens
        // when the PcscTag is dropped; here we only end the session.
        self.connected = false;
        Ok(())
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn authenticate(&mut self, sector: u8, key: &SectorKey) -> Result<bool> {
        let mut load = vec![0xFF, 0x82, 0x00, 0x00, 0x06];
        load.extend_from_slice(key.as_bytes());
        if !transmit_accepted(&self.card, &load)? {
            return Ok(false);
        }
        let block = sector * BLOCKS_PER_SECTOR;
        let auth = [
            0xFF, 0x86, 0x00, 0x00, 0x05, 0x01, 0x00, block, KEY_A, 0x00,
        ];
        transmit_accepted(&self.card, &auth)
    }

    fn read_block(&mut self, block: u8) -> Result<BlockData> {
        let resp = transmit(&self.card, &[0xFF, 0xB0, 0x00, block, BLOCK_LEN as u8])?;
        BlockData::try_from(resp.as_slice())
    }

    fn write_block(&mut self, block: u8, data: &BlockData) -> Result<()> {
        let mut apdu = vec![0xFF, 0xD6, 0x00, block, BLOCK_LEN as u8];
        apdu.extend_from_slice(data.as_bytes());
        transmit(&self.card, &apdu)?;
        Ok(())
    }
}
