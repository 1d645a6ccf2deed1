//! Tip pool service.
//!
//! [`TipService`] ties the distribution engine to a [`TipStore`]: it clamps
//! boundary inputs, resolves multipliers, runs the calculation, persists the
//! used multipliers and appends the result to the history. It also answers
//! history and export queries.
//!
//! The service holds no global state; construct one per process with the
//! store and roster from configuration.

use chrono::{Local, NaiveDateTime};
use rust_decimal::Decimal;
use tracing::info;

use crate::calculation::{TipDistribution, distribute_tips};
use crate::error::{EngineError, EngineResult};
use crate::history::{
    ExportFile, ExportSummary, TimeWindow, available_exports, export_window, filter_by_window,
};
use crate::models::{
    CalculationRecord, Multipliers, StaffMultiplier, TipInputs, clamp_multiplier,
    resolve_multipliers,
};
use crate::store::TipStore;

/// The result of a completed calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculationOutcome {
    /// The distribution with its intermediate figures.
    pub distribution: TipDistribution,
    /// The record appended to the history.
    pub record: CalculationRecord,
}

/// Calculates, persists and reports pooled tips.
pub struct TipService {
    store: Box<dyn TipStore>,
    roster: Vec<String>,
}

impl TipService {
    /// Creates a service over `store` for the given staff roster.
    pub fn new(store: impl TipStore + 'static, roster: Vec<String>) -> Self {
        Self {
            store: Box::new(store),
            roster,
        }
    }

    /// Returns the staff roster.
    pub fn roster(&self) -> &[String] {
        &self.roster
    }

    /// Returns every roster member's effective multiplier.
    pub fn roster_multipliers(&self) -> Vec<StaffMultiplier> {
        let resolved = resolve_multipliers(
            self.roster.iter().map(String::as_str),
            &self.store.load_multipliers(),
            &Multipliers::new(),
        );
        self.roster
            .iter()
            .map(|staff| StaffMultiplier {
                staff: staff.clone(),
                rate: resolved[staff],
            })
            .collect()
    }

    /// Persists a single staff member's multiplier and returns the clamped value.
    pub fn set_multiplier(&self, staff: &str, rate: Decimal) -> EngineResult<Decimal> {
        let rate = clamp_multiplier(rate);
        let mut multipliers = self.store.load_multipliers();
        multipliers.insert(staff.to_string(), rate);
        self.store.save_multipliers(&multipliers)?;

        info!(staff = %staff, rate = %rate, "Multiplier updated");
        Ok(rate)
    }

    /// Sets every roster member, and everyone already stored, to one multiplier.
    pub fn set_all_multipliers(&self, rate: Decimal) -> EngineResult<Multipliers> {
        let rate = clamp_multiplier(rate);
        let mut multipliers = self.store.load_multipliers();
        for staff in &self.roster {
            multipliers.insert(staff.clone(), rate);
        }
        for value in multipliers.values_mut() {
            *value = rate;
        }
        self.store.save_multipliers(&multipliers)?;

        info!(rate = %rate, staff_count = multipliers.len(), "All multipliers updated");
        Ok(multipliers)
    }

    /// Runs a calculation stamped with the current local time.
    pub fn calculate(
        &self,
        inputs: &TipInputs,
        overrides: &Multipliers,
    ) -> EngineResult<CalculationOutcome> {
        self.calculate_at(inputs, overrides, Local::now().naive_local())
    }

    /// Runs a calculation stamped with `timestamp`.
    ///
    /// Inputs are clamped, multipliers resolved for the roster and both
    /// shifts (override, then stored value, then 1.0), and the resolved
    /// multipliers saved before the record is appended.
    ///
    /// The two writes are not transactional. If appending the record fails,
    /// the just-used multipliers stay saved and the error is returned with
    /// no record in the history.
    pub fn calculate_at(
        &self,
        inputs: &TipInputs,
        overrides: &Multipliers,
        timestamp: NaiveDateTime,
    ) -> EngineResult<CalculationOutcome> {
        let inputs = inputs.clamped();
        let mut stored = self.store.load_multipliers();

        let mut staff = inputs.all_staff();
        staff.extend(self.roster.iter().map(String::as_str));
        let resolved = resolve_multipliers(staff, &stored, overrides);

        let distribution = distribute_tips(&inputs, &resolved);

        stored.extend(resolved);
        self.store.save_multipliers(&stored)?;

        let record = distribution
            .clone()
            .into_record(inputs.merchant_take_rate, timestamp);
        self.store.append_history(&record)?;

        info!(
            net_tips = %distribution.net_tips,
            tip_rate = %distribution.tip_rate,
            day_staff = inputs.day_staff.len(),
            night_staff = inputs.night_staff.len(),
            paid_out = %record.total_paid_out(),
            "Tip calculation recorded"
        );

        Ok(CalculationOutcome {
            distribution,
            record,
        })
    }

    /// Returns the history records within `window` of `now`.
    pub fn history(&self, window: TimeWindow, now: NaiveDateTime) -> Vec<CalculationRecord> {
        filter_by_window(&self.store.load_history(), window, now)
    }

    /// Renders the export for `window`.
    ///
    /// Returns `NoRecordsForWindow` when nothing falls within the window.
    pub fn export(&self, window: TimeWindow, now: NaiveDateTime) -> EngineResult<ExportFile> {
        export_window(&self.store.load_history(), window, now)?.ok_or_else(|| {
            EngineError::NoRecordsForWindow {
                window: window.to_string(),
            }
        })
    }

    /// Lists the windows that currently have something to export.
    pub fn available_exports(&self, now: NaiveDateTime) -> Vec<ExportSummary> {
        available_exports(&self.store.load_history(), now)
    }
}
