// membercard/src/tag/detect.rs

//! Tag detection dispatcher.
//!
//! The platform NFC stack pushes detected tags into a [`TagSink`]; a card
//! operation waits on the paired [`ScanSession`]. Waiting is bounded by
//! the scan-session window and can be cancelled cooperatively — but only
//! while still waiting. Once a tag is handed over, the operation runs to
//! completion or failure without a cancellation hook.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, SyncSender};
use std::time::{Duration, Instant};

use crate::{Error, Result};

/// Producer half handed to the platform detection callback.
pub struct TagSink<T> {
    tx: SyncSender<T>,
}

impl<T> TagSink<T> {
    /// Hand a newly detected tag to the waiting session. Returns `false`
    /// when the session is gone or already holds an undelivered tag.
    pub fn offer(&self, tag: T) -> bool {
        self.tx.try_send(tag).is_ok()
    }
}

/// Consumer half: one scan session, yielding at most the tags pushed
/// before its window closes.
pub struct ScanSession<T> {
    rx: Receiver<T>,
    cancelled: Arc<AtomicBool>,
    timeout: Duration,
}

/// Cooperative cancellation for the waiting stage.
#[derive(Clone)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    /// Stop the session from accepting further tags. Takes effect at the
    /// next poll; an operation already holding a tag is unaffected.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

/// Create a detection channel with the given scan-session window.
pub fn scan_channel<T>(timeout: Duration) -> (TagSink<T>, ScanSession<T>) {
    // Bounded at one: a session consumes a single tag per operation.
    let (tx, rx) = mpsc::sync_channel(1);
    (
        TagSink { tx },
        ScanSession {
            rx,
            cancelled: Arc::new(AtomicBool::new(false)),
            timeout,
        },
    )
}

impl<T> ScanSession<T> {
    /// Handle for cancelling this session from another thread.
    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle(self.cancelled.clone())
    }

    /// Block until a tag is detected. Times out after the session window,
    /// and honours [`CancelHandle::cancel`]; both cases surface as
    /// [`Error::NoTagDetected`], the re-tap condition.
    pub fn wait_for_tag(&self) -> Result<T> {
        let deadline = Instant::now() + self.timeout;
        loop {
            if self.cancelled.load(Ordering::SeqCst) {
                return Err(Error::NoTagDetected);
            }
            let now = Instant::now();
            if now >= deadline {
                return Err(Error::NoTagDetected);
            }
            // Short poll slices keep cancellation responsive.
            let slice = (deadline - now).min(Duration::from_millis(50));
            match self.rx.recv_timeout(slice) {
                Ok(tag) => return Ok(tag),
                Err(RecvTimeoutError::Timeout) => continue,
                Err(RecvTimeoutError::Disconnected) => return Err(Error::NoTagDetected),
            }
        }
    }
}
