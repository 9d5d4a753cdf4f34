// membercard/src/card/worker.rs

//! Per-operation background workers.
//!
//! Each user-triggered action gets a fresh worker thread owning the tag
//! for the duration of the operation. The completion callback runs
//! exactly once, after the tag connection has been closed: the session
//! guard inside the operation drops before the result reaches the
//! callback, so a callback never observes a live connection. There is no
//! cancellation once an operation has started and no mutual exclusion
//! across operations on the same tag; the caller must not trigger a
//! second scan while one is in flight.

use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};

use crate::card::{IssueRequest, OpReport, operations};
use crate::tag::MifareTag;

/// Run a read on its own worker thread; `on_result` fires once, after
/// the tag has been released.
pub fn spawn_read<T, F>(mut tag: T, on_result: F) -> JoinHandle<()>
where
    T: MifareTag + Send + 'static,
    F: FnOnce(OpReport) + Send + 'static,
{
    thread::spawn(move || {
        let report = OpReport::from_read(operations::read_card(&mut tag));
        on_result(report);
    })
}

/// Run a write on its own worker thread; `on_result` fires once, after
/// the tag has been released.
pub fn spawn_write<T, F>(mut tag: T, request: IssueRequest, on_result: F) -> JoinHandle<()>
where
    T: MifareTag + Send + 'static,
    F: FnOnce(OpReport) + Send + 'static,
{
    thread::spawn(move || {
        let report = OpReport::from_write(operations::write_card(&mut tag, &request));
        on_result(report);
    })
}

/// Run a clear on its own worker thread; `on_result` fires once, after
/// the tag has been released.
pub fn spawn_clear<T, F>(mut tag: T, on_result: F) -> JoinHandle<()>
where
    T: MifareTag + Send + 'static,
    F: FnOnce(OpReport) + Send + 'static,
{
    thread::spawn(move || {
        let report = OpReport::from_clear(operations::clear_card(&mut tag));
        on_result(report);
    })
}

/// One-shot channel variant of [`spawn_read`].
pub fn read_in_background<T>(tag: T) -> Receiver<OpReport>
where
    T: MifareTag + Send + 'static,
{
    let (tx, rx) = mpsc::sync_channel(1);
    spawn_read(tag, move |report| {
        let _ = tx.send(report);
    });
    rx
}

/// One-shot channel variant of [`spawn_write`].
pub fn write_in_background<T>(tag: T, request: IssueRequest) -> Receiver<OpReport>
where
    T: MifareTag + Send + 'static,
{
    let (tx, rx) = mpsc::sync_channel(1);
    spawn_write(tag, request, move |report| {
        let _ = tx.send(report);
    });
    rx
}

/// One-shot channel variant of [`spawn_clear`].
pub fn clear_in_background<T>(tag: T) -> Receiver<OpReport>
where
    T: MifareTag + Send + 'static,
{
    let (tx, rx) = mpsc::sync_channel(1);
    spawn_clear(tag, move |report| {
        let _ = tx.send(report);
    });
    rx
}

/// Async wrappers over the blocking operations, with the same
/// invoke-after-close ordering.
#[cfg(feature = "async")]
pub mod nonblocking {
    use super::*;

    fn join_error(e: tokio::task::JoinError) -> OpReport {
        OpReport {
            success: false,
            message: format!("worker failed: {}", e),
            data: None,
        }
    }

    /// Read a card on the blocking pool.
    pub async fn read_card<T>(mut tag: T) -> OpReport
    where
        T: MifareTag + Send + 'static,
    {
        tokio::task::spawn_blocking(move || {
            OpReport::from_read(operations::read_card(&mut tag))
        })
        .await
        .unwrap_or_else(join_error)
    }

    /// Write a card on the blocking pool.
    pub async fn write_card<T>(mut tag: T, request: IssueRequest) -> OpReport
    where
        T: MifareTag + Send + 'static,
    {
        tokio::task::spawn_blocking(move || {
            OpReport::from_write(operations::write_card(&mut tag, &request))
        })
        .await
        .unwrap_or_else(join_error)
    }

    /// Clear a card on the blocking pool.
    pub async fn clear_card<T>(mut tag: T) -> OpReport
    where
        T: MifareTag + Send + 'static,
    {
        tokio::task::spawn_blocking(move || {
            OpReport::from_clear(operations::clear_card(&mut tag))
        })
        .await
        .unwrap_or_else(join_error)
    }
}
