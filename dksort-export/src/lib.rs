//! CSV export for dk-sort.
//!
//! Turns an ordered entry set into the downloadable payload: CSV text
//! with a fixed three-column header, base64-encoded for transport, and
//! named after the moment of export.

mod csv;
mod download;

pub use csv::{csv_cell, encode_csv, entry_row, pack_whitespace, CSV_HEADER};
pub use download::{
    build_download, build_download_at, export_filename, export_filename_at, to_base64, CSV_MIME,
};
