//! Core type definitions for dk-sort.
//!
//! This crate defines the host-agnostic types shared across the engine:
//! - Entry snapshots and their write-back contents
//! - Epoch-millisecond entry timestamps
//! - The panel's sort mode selection
//! - File-delivery payloads
//!
//! Anything that knows about a concrete host page belongs in
//! `dksort-page`, not here.

mod download;
mod entry;
mod mode;
mod timestamp;

pub use download::FileDownload;
pub use entry::{EntryContent, EntrySnapshot};
pub use mode::SortMode;
pub use timestamp::EntryTime;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("unknown sort mode: {0}")]
    UnknownMode(String),
}
