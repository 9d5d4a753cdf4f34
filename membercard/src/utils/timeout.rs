//! Timeout helpers used across the crate.
//!
//! Keep these helpers minimal: they centralize the scan-session window and
//! provide a small conversion helper so tests and code can express
//! timeouts in milliseconds clearly.

use std::time::Duration;

/// Default scan-session window in milliseconds: how long a scan session
/// listens for a tag before giving up. The authenticate/read/write calls
/// themselves carry no timeout; this only bounds the waiting-for-a-tag
/// stage.
pub const DEFAULT_SCAN_TIMEOUT_MS: u64 = 20_000;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Convenience: default scan-session window as Duration.
pub fn default_scan_timeout() -> Duration {
    ms(DEFAULT_SCAN_TIMEOUT_MS)
}
