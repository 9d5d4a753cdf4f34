// membercard/src/error.rs

use thiserror::Error;

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    /// No tag was presented before the scan window closed, or the scan was
    /// cancelled while waiting.
    #[error("No card detected")]
    NoTagDetected,

    /// The presented tag is not a MIFARE Classic card.
    #[error("Not a Mifare Classic card")]
    UnsupportedCardType,

    /// Neither known key A authenticated the sector. The sector number is
    /// part of the message so operators can tell an unformatted card from a
    /// transient misread.
    #[error("Authentication failed for Sector {sector}")]
    SectorAuthFailed {
        /// Sector that rejected both keys.
        sector: u8,
    },

    /// Low-level driver failure, surfaced with the underlying message.
    #[error("Card I/O error: {0}")]
    Io(String),

    /// Block index outside the card, the manufacturer block, or a sector
    /// trailer.
    #[error("invalid block index {0}")]
    InvalidBlock(u8),

    /// A byte slice had the wrong length for the target type.
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Required number of bytes.
        expected: usize,
        /// Number of bytes supplied.
        actual: usize,
    },

    /// Tag UIDs are 4 to 10 bytes.
    #[error("invalid uid length: {0} bytes")]
    InvalidUidLength(usize),

    /// Day/month/year combination that cannot be a calendar date.
    #[error("invalid date {day:02}-{month:02}-{year:04}")]
    InvalidDate {
        /// Day of month.
        day: u8,
        /// Month.
        month: u8,
        /// Four-digit year.
        year: u16,
    },

    // PC/SC support is an optional dependency so the codec builds without
    // a smart-card stack installed.
    /// PC/SC stack error.
    #[cfg(feature = "pcsc")]
    #[error("pcsc error: {0}")]
    Pcsc(#[from] pcsc::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
