use crate::Result;
use crate::card::{CardData, ReadOutcome};

/// Operation outcome as surfaced to the caller: a success flag, an
/// operator-facing message, and the decoded data for reads.
///
/// No error escapes an operation worker; everything is folded into this
/// shape after the tag connection has been released.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpReport {
    /// Whether the operation achieved its goal. Partial reads count as
    /// success.
    pub success: bool,
    /// Operator-facing message.
    pub message: String,
    /// Decoded card data for successful non-blank reads.
    pub data: Option<CardData>,
}

impl OpReport {
    fn ok(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            data: None,
        }
    }

    fn fail(error: &crate::Error) -> Self {
        Self {
            success: false,
            message: error.to_string(),
            data: None,
        }
    }

    /// Fold a read result into a report.
    pub fn from_read(result: Result<ReadOutcome>) -> Self {
        match result {
            Ok(ReadOutcome::Blank) => Self::ok("Blank card"),
            Ok(ReadOutcome::Data(data)) => Self {
                success: true,
                message: "Data read successfully".to_string(),
                data: Some(data),
            },
            Err(e) => Self::fail(&e),
        }
    }

    /// Fold a write result into a report.
    pub fn from_write(result: Result<()>) -> Self {
        match result {
            Ok(()) => Self::ok("Data written successfully"),
            Err(e) => Self::fail(&e),
        }
    }

    /// Fold a clear result into a report.
    pub fn from_clear(result: Result<()>) -> Self {
        match result {
            Ok(()) => Self::ok("Card cleared"),
            Err(e) => Self::fail(&e),
        }
    }
}
