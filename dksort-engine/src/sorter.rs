//! Entry ordering.

use dksort_types::{EntrySnapshot, SortMode};

/// Sorts entries by timestamp under the given mode.
///
/// The sort is stable, so entries with equal timestamps keep their
/// document order in either mode. Entries whose timestamp attribute was
/// missing carry the zero key and group at the oldest end.
#[must_use]
pub fn sort_entries(mut entries: Vec<EntrySnapshot>, mode: SortMode) -> Vec<EntrySnapshot> {
    entries.sort_by(|a, b| mode.order(a.time, b.time));
    entries
}
