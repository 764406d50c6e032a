//! CSV file writer
//!
//! Writes the header and flattened rows to a timestamped file inside the
//! output directory, creating the directory if absent. The timestamped name
//! keeps runs from colliding and doubles as an audit trail.

use crate::error::{Error, Result};
use crate::flatten::{FlatRow, CSV_HEADER};
use chrono::{Local, NaiveDateTime};
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of a completed export.
#[derive(Debug, Clone)]
pub struct ExportReport {
    /// Path of the written file
    pub path: PathBuf,
    /// Number of data rows written, excluding the header
    pub rows_written: usize,
}

/// Build the export file name for a wall-clock instant.
pub fn export_filename(now: NaiveDateTime) -> String {
    format!("instacart_orders_{}.csv", now.format("%m-%d-%Y_%H-%M-%S"))
}

/// Write rows to a timestamped CSV file inside `dir`.
pub fn write_export(dir: &Path, rows: &[FlatRow]) -> Result<ExportReport> {
    let path = dir.join(export_filename(Local::now().naive_local()));
    write_rows(&path, rows)
}

/// Write the header and rows to `path`, creating parent directories.
pub fn write_rows(path: &Path, rows: &[FlatRow]) -> Result<ExportReport> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::output(format!(
                    "failed to create directory {}: {e}",
                    parent.display()
                ))
            })?;
        }
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| Error::output(format!("failed to create {}: {e}", path.display())))?;

    writer
        .write_record(CSV_HEADER)
        .map_err(|e| Error::output(format!("failed to write header: {e}")))?;

    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| Error::output(format!("failed to write row {}: {e}", row.id)))?;
    }

    writer.flush().map_err(Error::Io)?;

    Ok(ExportReport {
        path: path.to_path_buf(),
        rows_written: rows.len(),
    })
}
