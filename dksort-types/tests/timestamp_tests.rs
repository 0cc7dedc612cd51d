use dksort_types::{EntryTime, Error};
use proptest::prelude::*;
use std::str::FromStr;

// ── Construction ─────────────────────────────────────────────────

#[test]
fn epoch_millis_round_trip() {
    let t = EntryTime::from_epoch_millis(1_500);
    assert_eq!(t.epoch_millis(), 1_500);
}

#[test]
fn from_attr_parses_numeric() {
    let t = EntryTime::from_attr(Some("1500"));
    assert_eq!(t, EntryTime::from_epoch_millis(1_500));
}

#[test]
fn from_attr_trims_whitespace() {
    let t = EntryTime::from_attr(Some(" 1500 "));
    assert_eq!(t, EntryTime::from_epoch_millis(1_500));
}

#[test]
fn from_attr_missing_coerces_to_zero() {
    assert_eq!(EntryTime::from_attr(None), EntryTime::ZERO);
}

#[test]
fn from_attr_malformed_coerces_to_zero() {
    assert_eq!(EntryTime::from_attr(Some("not-a-number")), EntryTime::ZERO);
    assert_eq!(EntryTime::from_attr(Some("")), EntryTime::ZERO);
    assert_eq!(EntryTime::from_attr(Some("1.5e3")), EntryTime::ZERO);
}

#[test]
fn from_attr_keeps_negative_values() {
    let t = EntryTime::from_attr(Some("-5"));
    assert_eq!(t, EntryTime::from_epoch_millis(-5));
}

#[test]
fn strict_parse_rejects_malformed() {
    assert!(matches!(
        EntryTime::from_str("nope"),
        Err(Error::InvalidTimestamp(_))
    ));
}

#[test]
fn strict_parse_accepts_numeric() {
    let t = EntryTime::from_str("42").unwrap();
    assert_eq!(t.epoch_millis(), 42);
}

// ── Ordering ─────────────────────────────────────────────────────

#[test]
fn zero_sorts_lowest_among_real_timestamps() {
    let mut times = vec![
        EntryTime::from_epoch_millis(2_000),
        EntryTime::ZERO,
        EntryTime::from_epoch_millis(1_000),
    ];
    times.sort();
    assert_eq!(
        times,
        vec![
            EntryTime::ZERO,
            EntryTime::from_epoch_millis(1_000),
            EntryTime::from_epoch_millis(2_000),
        ]
    );
}

// ── Rendering ────────────────────────────────────────────────────

#[test]
fn iso8601_second_boundary() {
    let t = EntryTime::from_epoch_millis(1_000);
    assert_eq!(t.to_iso8601(), "1970-01-01T00:00:01.000Z");
}

#[test]
fn iso8601_keeps_milliseconds() {
    let t = EntryTime::from_epoch_millis(1_234);
    assert_eq!(t.to_iso8601(), "1970-01-01T00:00:01.234Z");
}

#[test]
fn iso8601_modern_date() {
    let t = EntryTime::from_epoch_millis(1_609_459_200_000);
    assert_eq!(t.to_iso8601(), "2021-01-01T00:00:00.000Z");
}

#[test]
fn display_matches_iso8601() {
    let t = EntryTime::from_epoch_millis(1_234);
    assert_eq!(t.to_string(), t.to_iso8601());
}

// ── Serde ────────────────────────────────────────────────────────

#[test]
fn serializes_as_bare_millis() {
    let t = EntryTime::from_epoch_millis(42);
    assert_eq!(serde_json::to_string(&t).unwrap(), "42");

    let back: EntryTime = serde_json::from_str("42").unwrap();
    assert_eq!(back, t);
}

// ── Properties ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn attr_round_trip(millis in 0i64..4_102_444_800_000) {
        let t = EntryTime::from_attr(Some(&millis.to_string()));
        prop_assert_eq!(t.epoch_millis(), millis);
    }

    /// Fixed-width rendering means lexicographic order matches
    /// chronological order for any pair of same-era timestamps.
    #[test]
    fn iso8601_preserves_order(
        a in 0i64..4_102_444_800_000,
        b in 0i64..4_102_444_800_000,
    ) {
        let (ta, tb) = (EntryTime::from_epoch_millis(a), EntryTime::from_epoch_millis(b));
        prop_assert_eq!(a.cmp(&b), ta.to_iso8601().cmp(&tb.to_iso8601()));
    }
}
