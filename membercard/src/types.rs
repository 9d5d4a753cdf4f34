// membercard/src/types.rs

use crate::Error;
use crate::constants::{BLOCK_LEN, CARD_TYPE_SECTOR, PRIMARY_SECTOR, SECONDARY_SECTOR};
use derive_more::Display;
use std::convert::TryFrom;

/// Tag UID / MFID - Newtype Pattern (4 to 10 bytes)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Uid(Vec<u8>);

impl Uid {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if !(4..=10).contains(&bytes.len()) {
            return Err(Error::InvalidUidLength(bytes.len()));
        }
        Ok(Self(bytes.to_vec()))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Uppercase hex without separators, the `card_mfid` form correlated
    /// with backend records.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_upper(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

/// Sector key A - Newtype Pattern (6 bytes)
///
/// Only the two publicly known keys are used; they distinguish factory
/// blank cards from formatted ones and are not a security boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SectorKey([u8; 6]);

impl SectorKey {
    /// Factory default key.
    pub const DEFAULT: Self = Self([0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]);
    /// Key applied by NFC Forum formatting tools.
    pub const NFC_FORUM: Self = Self([0xD3, 0xF7, 0xD3, 0xF7, 0xD3, 0xF7]);
    /// Authentication order: default first, NFC Forum on rejection. No
    /// third key is ever tried.
    pub const FALLBACK_CHAIN: [Self; 2] = [Self::DEFAULT, Self::NFC_FORUM];

    pub const fn from_bytes(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }
}

/// BlockData (16 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockData([u8; BLOCK_LEN]);

impl BlockData {
    pub fn from_bytes(bytes: [u8; BLOCK_LEN]) -> Self {
        Self(bytes)
    }

    /// All-zero block, the cleared/unissued state.
    pub const fn zeroed() -> Self {
        Self([0u8; BLOCK_LEN])
    }

    pub fn as_bytes(&self) -> &[u8; BLOCK_LEN] {
        &self.0
    }

    pub fn is_zeroed(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }

    pub fn to_ascii_safe(&self) -> String {
        self.0
            .iter()
            .map(|&b| {
                if b.is_ascii_graphic() || b == b' ' {
                    b as char
                } else {
                    '.'
                }
            })
            .collect()
    }
}

impl TryFrom<&[u8]> for BlockData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != BLOCK_LEN {
            return Err(Error::InvalidLength {
                expected: BLOCK_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; BLOCK_LEN];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// Calendar date as stored on the card (DDMMYYYY digits).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{:02}-{:02}-{:04}", day, month, year)]
pub struct CardDate {
    /// Day of month, 1-31.
    pub day: u8,
    /// Month, 1-12.
    pub month: u8,
    /// Four-digit year.
    pub year: u16,
}

impl CardDate {
    pub fn new(day: u8, month: u8, year: u16) -> Result<Self, Error> {
        if !(1..=31).contains(&day) || !(1..=12).contains(&month) || year > 9999 {
            return Err(Error::InvalidDate { day, month, year });
        }
        Ok(Self { day, month, year })
    }

    /// The 8-digit `DDMMYYYY` string written to date blocks.
    pub fn to_digits(&self) -> String {
        format!("{:02}{:02}{:04}", self.day, self.month, self.year)
    }
}

/// Logical member field and its physical home on the card.
///
/// The mapping is invariant for the lifetime of the system; cards in the
/// field were issued against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardField {
    /// Member identifier, sector 3 block 12.
    MemberId,
    /// Company name, sector 3 block 13.
    CompanyName,
    /// Membership expiry date, sector 3 block 14.
    ValidUpto,
    /// Accumulated purchase amount, sector 4 block 16.
    TotalBuy,
    /// Date the card was last written, sector 4 block 17.
    LastWriteDate,
    /// Member password, sector 4 block 18.
    Password,
    /// Card tier, sector 5 block 20.
    CardType,
}

impl CardField {
    /// Every field in block order.
    pub const ALL: [Self; 7] = [
        Self::MemberId,
        Self::CompanyName,
        Self::ValidUpto,
        Self::TotalBuy,
        Self::LastWriteDate,
        Self::Password,
        Self::CardType,
    ];

    pub fn sector(self) -> u8 {
        match self {
            Self::MemberId | Self::CompanyName | Self::ValidUpto => PRIMARY_SECTOR,
            Self::TotalBuy | Self::LastWriteDate | Self::Password => SECONDARY_SECTOR,
            Self::CardType => CARD_TYPE_SECTOR,
        }
    }

    pub fn block(self) -> u8 {
        match self {
            Self::MemberId => 12,
            Self::CompanyName => 13,
            Self::ValidUpto => 14,
            Self::TotalBuy => 16,
            Self::LastWriteDate => 17,
            Self::Password => 18,
            Self::CardType => 20,
        }
    }

    /// Date fields carry DDMMYYYY digits instead of free text.
    pub fn is_date(self) -> bool {
        matches!(self, Self::ValidUpto | Self::LastWriteDate)
    }

    /// Field name used in the read-result map and by the backend.
    pub fn key(self) -> &'static str {
        match self {
            Self::MemberId => "memberId",
            Self::CompanyName => "companyName",
            Self::ValidUpto => "validUpto",
            Self::TotalBuy => "totalBuy",
            // Historical name: the block is stamped on every write but the
            // backend consumes it as the last purchase date.
            Self::LastWriteDate => "lastBuyDate",
            Self::Password => "password",
            Self::CardType => "cardType",
        }
    }
}
