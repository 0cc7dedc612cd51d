//! Entry snapshots and write-back contents.
//!
//! An entry is a view over a host-page element, not an owned record: it
//! has no identity beyond its position in the sequence the page returns,
//! and the host may replace it at any time. Reads produce
//! [`EntrySnapshot`]s; reordering writes [`EntryContent`]s back across
//! the existing element slots, preserving the elements themselves.

use crate::EntryTime;
use serde::{Deserialize, Serialize};

/// A read-time view of one live-update entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntrySnapshot {
    /// The entry's timestamp attribute.
    pub time: EntryTime,

    /// Plain text as derived by the host, whitespace preserved.
    pub text: String,

    /// Verbatim rendered markup.
    pub html: String,
}

impl EntrySnapshot {
    /// Creates a snapshot.
    #[must_use]
    pub fn new(time: EntryTime, text: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            time,
            text: text.into(),
            html: html.into(),
        }
    }

    /// Converts into the write-back payload. Plain text is dropped; the
    /// host re-derives it from the markup.
    #[must_use]
    pub fn into_content(self) -> EntryContent {
        EntryContent {
            time: self.time,
            html: self.html,
        }
    }
}

/// The write-back half of an entry: the `(timestamp, markup)` pair that
/// gets swapped across element slots when reordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryContent {
    /// Timestamp to stamp onto the slot.
    pub time: EntryTime,

    /// Markup to place into the slot.
    pub html: String,
}
