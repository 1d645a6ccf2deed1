//! History queries and spreadsheet exports.
//!
//! This module filters the calculation history by time window, flattens
//! records into a tabular report and renders that report as xlsx.

mod export;
mod report;
mod window;

pub use export::{ExportFile, ExportSummary, XLSX_CONTENT_TYPE, available_exports, export_window};
pub use report::{DATE_FORMAT, TIME_FORMAT, TipReport, TipReportRow, render_tabular};
pub use window::{TimeWindow, filter_by_window};
