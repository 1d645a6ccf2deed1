//! Per-window spreadsheet exports.
//!
//! One export is produced per time window. A window with no matching
//! records yields no export at all.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::EngineResult;
use crate::models::CalculationRecord;

use super::report::render_tabular;
use super::window::{TimeWindow, filter_by_window};

/// MIME type of the xlsx exports.
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// A rendered spreadsheet for one time window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    /// The window this export covers.
    pub window: TimeWindow,
    /// Suggested download file name.
    pub file_name: String,
    /// Number of calculation records included.
    pub record_count: usize,
    /// The xlsx document.
    pub bytes: Vec<u8>,
}

/// Describes a window that currently has something to export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSummary {
    /// The window.
    pub window: TimeWindow,
    /// Human-readable label.
    pub label: String,
    /// Suggested download file name.
    pub file_name: String,
    /// Number of calculation records in the window.
    pub record_count: usize,
}

/// Renders the export for `window`, or `None` if the window is empty.
pub fn export_window(
    history: &[CalculationRecord],
    window: TimeWindow,
    now: NaiveDateTime,
) -> EngineResult<Option<ExportFile>> {
    let records = filter_by_window(history, window, now);
    if records.is_empty() {
        return Ok(None);
    }

    let report = render_tabular(&records);
    let bytes = report.to_xlsx_bytes()?;
    info!(
        window = %window,
        records = records.len(),
        rows = report.len(),
        "Rendered tip export"
    );

    Ok(Some(ExportFile {
        window,
        file_name: window.file_name(),
        record_count: records.len(),
        bytes,
    }))
}

/// Lists the windows that have at least one record, in offer order.
pub fn available_exports(history: &[CalculationRecord], now: NaiveDateTime) -> Vec<ExportSummary> {
    TimeWindow::ALL
        .into_iter()
        .filter_map(|window| {
            let record_count = filter_by_window(history, window, now).len();
            (record_count > 0).then(|| ExportSummary {
                window,
                label: window.label().to_string(),
                file_name: window.file_name(),
                record_count,
            })
        })
        .collect()
}
