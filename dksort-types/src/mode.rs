//! Sort order selection for live-update entries.

use crate::{EntryTime, Error};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// The ordering applied to entries, selected from the panel.
///
/// `Ascending` (oldest first) is the default, matching the panel's
/// initially selected option. It is also the order used before the panel
/// has been attached at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortMode {
    /// Oldest entries first.
    #[default]
    #[serde(rename = "asc")]
    Ascending,

    /// Newest entries first.
    #[serde(rename = "desc")]
    Descending,
}

impl SortMode {
    /// The wire key used by the panel's mode selector.
    #[must_use]
    pub const fn as_key(&self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    /// Compares two entry timestamps under this mode.
    ///
    /// Ties compare equal in either mode, so a stable sort keeps tied
    /// entries in document order.
    #[must_use]
    pub fn order(&self, a: EntryTime, b: EntryTime) -> Ordering {
        match self {
            Self::Ascending => a.cmp(&b),
            Self::Descending => b.cmp(&a),
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_key())
    }
}

impl FromStr for SortMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Ascending),
            "desc" => Ok(Self::Descending),
            other => Err(Error::UnknownMode(other.to_string())),
        }
    }
}
