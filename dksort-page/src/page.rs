//! The host-page trait.
//!
//! A [`LivePage`] is the engine's whole view of the outside world: an
//! eventually consistent producer of timestamped entries and a sink for
//! reordering, panel attachment, count updates, notices, and file
//! delivery. The engine holds no references into the page between
//! calls; every refresh re-reads from scratch.

use crate::{PageResult, PanelSpec};
use dksort_types::{EntryContent, EntrySnapshot, FileDownload};

/// A host document carrying live-update entries.
///
/// Implementations are memory-resident views (a DOM bridge, the
/// in-memory [`MemoryPage`](crate::MemoryPage)), so methods are
/// synchronous; the engine provides all scheduling around them.
pub trait LivePage: Send + Sync {
    /// Whether the story anchor the panel hangs off has been rendered.
    fn anchor_ready(&self) -> bool;

    /// Whether any live-update entries exist yet.
    fn has_entries(&self) -> bool;

    /// Snapshots every entry in current document order.
    ///
    /// Re-evaluated on every call, never cached.
    fn entries(&self) -> Vec<EntrySnapshot>;

    /// Writes entry contents back across the existing slots in place,
    /// permuting what each slot shows while preserving the slots
    /// themselves (and whatever listeners hang off them).
    ///
    /// Fails with [`PageError::EntriesChanged`](crate::PageError) when
    /// `contents` no longer matches the live slot count.
    fn apply_entries(&self, contents: &[EntryContent]) -> PageResult<()>;

    /// Attaches the control panel immediately after the anchor,
    /// replacing any previously attached panel.
    fn attach_panel(&self, panel: &PanelSpec) -> PageResult<()>;

    /// Updates the panel's entry count display.
    fn set_entry_count(&self, count: usize);

    /// Shows an informational notice to the user.
    fn show_notice(&self, text: &str);

    /// Hands a file to the host's download mechanism.
    fn deliver_file(&self, file: &FileDownload) -> PageResult<()>;
}
