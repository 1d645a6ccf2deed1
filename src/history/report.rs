//! Tabular tip reports and spreadsheet rendering.
//!
//! A [`TipReport`] flattens calculation records into one row per
//! (record, staff member). It renders to a single-sheet xlsx workbook with
//! the columns `Date, Time, Merchant Take Rate, Staff, Final Tips Earned`.

use std::path::Path;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::CalculationRecord;

/// Date column format.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Time column format.
pub const TIME_FORMAT: &str = "%H:%M:%S";

const SHEET_NAME: &str = "Tip Distribution";

/// One staff member's payout from one calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipReportRow {
    /// Calendar date of the calculation.
    pub date: NaiveDate,
    /// Time of day of the calculation.
    pub time: NaiveTime,
    /// The merchant take rate used.
    pub merchant_take_rate: Decimal,
    /// The staff member.
    pub staff: String,
    /// The staff member's final payout.
    pub final_tips_earned: Decimal,
}

/// A flattened, spreadsheet-ready view of calculation records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipReport {
    rows: Vec<TipReportRow>,
}

impl TipReport {
    /// Column headers, in order.
    pub const HEADERS: [&'static str; 5] = [
        "Date",
        "Time",
        "Merchant Take Rate",
        "Staff",
        "Final Tips Earned",
    ];

    /// Returns the report rows.
    pub fn rows(&self) -> &[TipReportRow] {
        &self.rows
    }

    /// Returns the number of rows, excluding the header.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the report has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Renders the report as xlsx bytes.
    pub fn to_xlsx_bytes(&self) -> EngineResult<Vec<u8>> {
        self.build_workbook()
            .and_then(|mut workbook| workbook.save_to_buffer())
            .map_err(export_error)
    }

    /// Writes the report as an xlsx file.
    pub fn write_xlsx<P: AsRef<Path>>(&self, path: P) -> EngineResult<()> {
        self.build_workbook()
            .and_then(|mut workbook| workbook.save(path.as_ref()))
            .map_err(export_error)
    }

    fn build_workbook(&self) -> Result<Workbook, XlsxError> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME)?;

        for (col, header) in Self::HEADERS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
            worksheet.set_column_width(col as u16, 20.0)?;
        }

        for (index, row) in self.rows.iter().enumerate() {
            let line = (index + 1) as u32;
            let date = row.date.format(DATE_FORMAT).to_string();
            let time = row.time.format(TIME_FORMAT).to_string();

            worksheet.write_string(line, 0, &date)?;
            worksheet.write_string(line, 1, &time)?;
            worksheet.write_number(line, 2, to_cell_number(row.merchant_take_rate))?;
            worksheet.write_string(line, 3, &row.staff)?;
            worksheet.write_number(line, 4, to_cell_number(row.final_tips_earned))?;
        }

        Ok(workbook)
    }
}

fn to_cell_number(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

fn export_error(err: XlsxError) -> EngineError {
    EngineError::ExportFailed {
        message: err.to_string(),
    }
}

/// Flattens records into one report row per (record, staff member).
///
/// Records keep their history order; within a record, staff are listed by name.
///
/// # Examples
///
/// ```
/// use tip_pool_engine::history::{TipReport, render_tabular};
///
/// let report = render_tabular(&[]);
/// assert!(report.is_empty());
/// assert_eq!(TipReport::HEADERS[4], "Final Tips Earned");
/// ```
pub fn render_tabular(records: &[CalculationRecord]) -> TipReport {
    let rows = records
        .iter()
        .flat_map(|record| {
            record
                .tips_distribution
                .iter()
                .map(move |(staff, tips)| TipReportRow {
                    date: record.timestamp.date(),
                    time: record.timestamp.time(),
                    merchant_take_rate: record.merchant_take_rate,
                    staff: staff.clone(),
                    final_tips_earned: *tips,
                })
        })
        .collect();

    TipReport { rows }
}
