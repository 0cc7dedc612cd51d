//! CSV serialization of entry snapshots.
//!
//! Output format: a `time_utc,text,html` header row, then one row per
//! entry. Data cells are double-quoted with internal quotes doubled.
//! Rows are joined with `\n` and there is no trailing newline.

use dksort_types::EntrySnapshot;

/// The header row.
pub const CSV_HEADER: &str = "time_utc,text,html";

/// Encodes one value as a quoted CSV cell, doubling internal quotes.
#[must_use]
pub fn csv_cell(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Collapses every whitespace run that contains a newline into a single
/// `\n`. Runs without a newline are left untouched, so intra-line
/// spacing survives while blank lines and indentation around line breaks
/// collapse.
#[must_use]
pub fn pack_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut run = String::new();
    let mut run_has_newline = false;

    for ch in text.chars() {
        if ch.is_whitespace() {
            run.push(ch);
            if ch == '\n' {
                run_has_newline = true;
            }
        } else {
            if !run.is_empty() {
                if run_has_newline {
                    out.push('\n');
                } else {
                    out.push_str(&run);
                }
                run.clear();
                run_has_newline = false;
            }
            out.push(ch);
        }
    }

    if !run.is_empty() {
        if run_has_newline {
            out.push('\n');
        } else {
            out.push_str(&run);
        }
    }

    out
}

/// Encodes one entry as a CSV row: ISO-8601 UTC time, packed plain
/// text, verbatim markup.
#[must_use]
pub fn entry_row(entry: &EntrySnapshot) -> String {
    [
        csv_cell(&entry.time.to_iso8601()),
        csv_cell(&pack_whitespace(&entry.text)),
        csv_cell(&entry.html),
    ]
    .join(",")
}

/// Encodes entries, in the order given, as a complete CSV document.
#[must_use]
pub fn encode_csv(entries: &[EntrySnapshot]) -> String {
    let mut rows = Vec::with_capacity(entries.len() + 1);
    rows.push(CSV_HEADER.to_string());
    rows.extend(entries.iter().map(entry_row));
    rows.join("\n")
}
