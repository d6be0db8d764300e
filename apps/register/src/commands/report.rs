//! # Report Commands
//!
//! The units-sold report, on screen and as a CSV file.
//!
//! ## Export Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Report Export                                        │
//! │                                                                         │
//! │  till> export [path]                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌───────────────────────────────────────────┐                         │
//! │  │  Path given?                              │                         │
//! │  │  YES: use it (".csv" added if no ext.)    │                         │
//! │  │  NO:  export_dir/sales_report_<ts>.csv    │                         │
//! │  └───────────────────────────────────────────┘                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  snapshot ledger ──► create/truncate file ──► till_core::report        │
//! │                                                    │                    │
//! │                                                    ▼                    │
//! │  Report saved to <path>              flush, close handle               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The session is only read; an export failure leaves it untouched.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::state::{ConfigState, SessionState};
use till_core::report::write_csv;
use till_core::{LedgerEntry, ReportError};

/// One report row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub item: String,
    pub units_sold: i64,
}

impl From<&LedgerEntry> for ReportRow {
    fn from(entry: &LedgerEntry) -> Self {
        ReportRow {
            item: entry.item.clone(),
            units_sold: entry.units_sold,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResponse {
    pub path: String,
    pub rows: usize,
}

/// Units sold per item, in the order items were first sold.
pub fn get_report(session: &SessionState) -> Vec<ReportRow> {
    debug!("get_report command");
    session.with_session(|s| s.ledger().list().map(ReportRow::from).collect())
}

/// Writes the sales report as CSV.
///
/// ## Arguments
/// * `path` - Destination chosen by the operator. `None` means the default
///   file in the configured export folder; an empty string means no
///   destination was chosen.
///
/// ## Returns
/// Where the report went and how many item rows it has.
pub fn export_report(
    session: &SessionState,
    config: &ConfigState,
    path: Option<&str>,
) -> Result<ExportResponse, ApiError> {
    debug!(path = ?path, "export_report command");

    let snapshot = session.with_session(|s| s.ledger_snapshot());

    let destination = resolve_destination(config, path).map_err(|e| {
        warn!(error = %e, "Export rejected");
        ApiError::from(e)
    })?;

    write_report_file(&destination, &snapshot).map_err(|e| {
        warn!(path = %destination.display(), error = %e, "Export failed");
        ApiError::from(e)
    })?;

    info!(path = %destination.display(), rows = snapshot.len(), "Report exported");

    Ok(ExportResponse {
        path: destination.display().to_string(),
        rows: snapshot.len(),
    })
}

/// Picks the file the report goes to.
fn resolve_destination(config: &ConfigState, path: Option<&str>) -> Result<PathBuf, ReportError> {
    let Some(path) = path else {
        fs::create_dir_all(&config.export_dir)?;
        return Ok(config.default_report_path(Local::now()));
    };

    let path = path.trim();
    if path.is_empty() {
        return Err(ReportError::NoDestination);
    }

    let mut destination = PathBuf::from(path);
    if path.ends_with(std::path::is_separator) || destination.is_dir() {
        return Err(ReportError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} is a folder, not a file", path),
        )));
    }

    if destination.file_name().is_some() && destination.extension().is_none() {
        destination.set_extension("csv");
    }
    Ok(destination)
}

/// Creates or truncates `path` and writes the report into it.
///
/// The file handle is dropped before this returns, on success and on error.
fn write_report_file(path: &Path, snapshot: &[LedgerEntry]) -> Result<(), ReportError> {
    let file = File::create(path)?;
    let mut writer = write_csv(snapshot, BufWriter::new(file))?;
    writer.flush()?;
    Ok(())
}
