// membercard/src/card/operations/mod.rs

//! Card operations: read, write (issue), clear.
//!
//! Each operation runs the same state machine: connect, authenticate
//! sector 3, then sectors 4 and 5 as its rules demand, and release the
//! connection unconditionally via the session guard. Partial writes are a
//! known, accepted failure mode; there is no rollback.

mod clear;
mod read;
mod write;

pub use clear::clear_card;
pub use read::read_card;
pub use write::write_card;
