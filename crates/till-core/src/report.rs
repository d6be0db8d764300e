//! # Sales Report
//!
//! Renders a ledger snapshot as CSV:
//!
//! ```text
//! Item,Units Sold
//! Shoes,3
//! Hat,1
//! ```
//!
//! Rows follow ledger order and lines end with the platform's terminator
//! (`\r\n` on Windows, `\n` elsewhere). Output depends only on the snapshot,
//! so rendering the same snapshot twice gives identical bytes.
//!
//! This module writes into any `io::Write`; opening the destination file is
//! the caller's job.

use std::io;

use csv::{Terminator, WriterBuilder};

use crate::error::ReportError;
use crate::types::LedgerEntry;
use crate::REPORT_HEADER;

/// Record terminator used for exported reports.
pub fn line_terminator() -> Terminator {
    if cfg!(windows) {
        Terminator::CRLF
    } else {
        Terminator::Any(b'\n')
    }
}

/// Writes the report for `snapshot` into `writer`.
///
/// ## Returns
/// The writer, flushed, so the caller can finish with it (e.g. sync a file).
pub fn write_csv<W: io::Write>(snapshot: &[LedgerEntry], writer: W) -> Result<W, ReportError> {
    let mut csv_writer = WriterBuilder::new()
        .terminator(line_terminator())
        .from_writer(writer);

    csv_writer.write_record(REPORT_HEADER)?;

    for entry in snapshot {
        let units = entry.units_sold.to_string();
        csv_writer.write_record([entry.item.as_str(), units.as_str()])?;
    }

    csv_writer.flush()?;
    csv_writer
        .into_inner()
        .map_err(|e| ReportError::Io(e.into_error()))
}

/// Renders the report into memory.
pub fn to_csv_bytes(snapshot: &[LedgerEntry]) -> Result<Vec<u8>, ReportError> {
    write_csv(snapshot, Vec::new())
}
