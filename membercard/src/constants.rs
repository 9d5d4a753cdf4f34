// membercard/src/constants.rs
//! Card geometry and layout constants used across the crate

/// Bytes per MIFARE Classic block
pub const BLOCK_LEN: usize = 16;

/// Blocks per sector on a 1K card
pub const BLOCKS_PER_SECTOR: u8 = 4;

/// Sector count on a 1K card
pub const SECTOR_COUNT: u8 = 16;

/// Sector holding member id / company / valid-upto. Authentication here is
/// mandatory for every operation.
pub const PRIMARY_SECTOR: u8 = 3;

/// Sector holding total-buy / last-write date / password. Optional on read.
pub const SECONDARY_SECTOR: u8 = 4;

/// Sector holding the card type. Optional on read, untouched by clear.
pub const CARD_TYPE_SECTOR: u8 = 5;

/// Sectors reserved by this application, in authentication order.
pub const MEMBER_SECTORS: [u8; 3] = [PRIMARY_SECTOR, SECONDARY_SECTOR, CARD_TYPE_SECTOR];

/// Payload capacity of a hex-encoded block: 16 stored hex digits.
pub const MAX_FIELD_CHARS: usize = 8;

/// Digits in a stored date, DDMMYYYY.
pub const DATE_DIGITS: usize = 8;
