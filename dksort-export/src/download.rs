//! Export payload assembly.

use crate::encode_csv;
use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::{DateTime, Utc};
use dksort_types::{EntrySnapshot, FileDownload};
use tracing::debug;

/// MIME type of the exported file.
pub const CSV_MIME: &str = "text/csv";

/// Encodes text to standard base64 for transport.
#[must_use]
pub fn to_base64(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Export filename for the given moment, in UTC:
/// `dk-sort-entries-YYYYMMDD-HHMMSS.csv`.
#[must_use]
pub fn export_filename_at(now: DateTime<Utc>) -> String {
    format!("dk-sort-entries-{}.csv", now.format("%Y%m%d-%H%M%S"))
}

/// Export filename for the current moment.
#[must_use]
pub fn export_filename() -> String {
    export_filename_at(Utc::now())
}

/// Builds the download payload for entries already in their final row
/// order, stamped with the given moment.
#[must_use]
pub fn build_download_at(entries: &[EntrySnapshot], now: DateTime<Utc>) -> FileDownload {
    let csv = encode_csv(entries);
    debug!(rows = entries.len(), bytes = csv.len(), "encoded csv export");
    FileDownload::new(export_filename_at(now), CSV_MIME, to_base64(&csv))
}

/// Builds the download payload stamped with the current moment.
#[must_use]
pub fn build_download(entries: &[EntrySnapshot]) -> FileDownload {
    build_download_at(entries, Utc::now())
}
