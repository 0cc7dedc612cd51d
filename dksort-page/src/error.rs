//! Error types for the page seam.

use thiserror::Error;

/// Result type for page operations.
pub type PageResult<T> = Result<T, PageError>;

/// Errors that can occur against a host page.
#[derive(Debug, Error)]
pub enum PageError {
    /// The entry set changed between read and write-back.
    #[error("entry set changed: writing {writing} slots over {live} live")]
    EntriesChanged { writing: usize, live: usize },

    /// The panel anchor is not present in the document.
    #[error("story anchor not present")]
    AnchorMissing,

    /// The host refused or failed a file delivery.
    #[error("file delivery failed: {0}")]
    DeliveryFailed(String),
}
