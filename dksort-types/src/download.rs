//! File-delivery payloads.

use serde::{Deserialize, Serialize};

/// A named file handed to the host's download sink.
///
/// The payload travels base64-encoded so it stays binary-safe across
/// whatever delivery channel the host uses (the reference host builds a
/// `data:` URL out of it and clicks a synthetic anchor).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDownload {
    /// Suggested filename, e.g. `dk-sort-entries-20260807-153000.csv`.
    pub name: String,

    /// MIME type, e.g. `text/csv`.
    pub mime: String,

    /// Base64-encoded file bytes.
    pub data_base64: String,
}

impl FileDownload {
    /// Creates a download payload.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        mime: impl Into<String>,
        data_base64: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            data_base64: data_base64.into(),
        }
    }
}
