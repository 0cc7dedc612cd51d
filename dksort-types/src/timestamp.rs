//! Epoch-millisecond timestamps for live-update entries.
//!
//! The host page tags each entry with a numeric epoch-milliseconds
//! attribute. The attribute is externally supplied and occasionally
//! missing or malformed; the lossy constructor coerces those cases to
//! zero so they sort ahead of every real timestamp instead of failing.

use crate::Error;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Milliseconds since the Unix epoch, as carried on a live-update entry.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EntryTime(i64);

impl EntryTime {
    /// The zero timestamp. Entries whose timestamp attribute is missing
    /// or malformed coerce to this and sort as the lowest value.
    pub const ZERO: Self = Self(0);

    /// Creates a timestamp from epoch milliseconds.
    #[must_use]
    pub const fn from_epoch_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Returns the epoch milliseconds.
    #[must_use]
    pub const fn epoch_millis(&self) -> i64 {
        self.0
    }

    /// The current wall-clock time.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now().timestamp_millis())
    }

    /// Parses a timestamp attribute as the host page carries it.
    ///
    /// Absent or non-numeric values coerce to [`EntryTime::ZERO`].
    /// Callers that need to reject malformed input use [`FromStr`]
    /// instead.
    #[must_use]
    pub fn from_attr(attr: Option<&str>) -> Self {
        attr.and_then(|s| s.trim().parse::<i64>().ok())
            .map_or(Self::ZERO, Self)
    }

    /// Renders as an ISO-8601 UTC string with millisecond precision,
    /// e.g. `1970-01-01T00:00:01.000Z`.
    ///
    /// Values outside chrono's representable calendar range render as
    /// the Unix epoch.
    #[must_use]
    pub fn to_iso8601(&self) -> String {
        DateTime::<Utc>::from_timestamp_millis(self.0)
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
            .to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

impl fmt::Display for EntryTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_iso8601())
    }
}

impl FromStr for EntryTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| Error::InvalidTimestamp(s.to_string()))
    }
}
