//! Inputs to a tip distribution.
//!
//! [`TipInputs`] carries the sales and tip figures plus the day and night
//! shift rosters for a single calculation.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Identifies which shift a pool or payout belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shift {
    /// The daytime shift.
    Day,
    /// The nighttime shift.
    Night,
}

impl std::fmt::Display for Shift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Shift::Day => write!(f, "Day"),
            Shift::Night => write!(f, "Night"),
        }
    }
}

/// Clamps a merchant take rate into `[0, 1]`.
///
/// # Examples
///
/// ```
/// use tip_pool_engine::models::clamp_take_rate;
/// use rust_decimal::Decimal;
///
/// assert_eq!(clamp_take_rate(Decimal::new(12, 1)), Decimal::ONE);
/// assert_eq!(clamp_take_rate(Decimal::new(-1, 1)), Decimal::ZERO);
/// ```
pub fn clamp_take_rate(rate: Decimal) -> Decimal {
    rate.clamp(Decimal::ZERO, Decimal::ONE)
}

/// Sales, tips and rosters for one calculation.
///
/// A staff member may appear in both rosters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipInputs {
    /// Fraction of tips retained by the merchant, in `[0, 1]`.
    pub merchant_take_rate: Decimal,
    /// Total sales across both shifts.
    pub total_sales: Decimal,
    /// Sales attributed to the day shift.
    pub day_sales: Decimal,
    /// Sales attributed to the night shift.
    pub night_sales: Decimal,
    /// Total tips collected before the merchant's take.
    pub total_tips: Decimal,
    /// Staff working the day shift.
    pub day_staff: BTreeSet<String>,
    /// Staff working the night shift.
    pub night_staff: BTreeSet<String>,
}

impl TipInputs {
    /// Returns a copy with every figure clamped into its permitted domain.
    ///
    /// The take rate is clamped into `[0, 1]` and negative amounts become zero.
    pub fn clamped(&self) -> Self {
        Self {
            merchant_take_rate: clamp_take_rate(self.merchant_take_rate),
            total_sales: self.total_sales.max(Decimal::ZERO),
            day_sales: self.day_sales.max(Decimal::ZERO),
            night_sales: self.night_sales.max(Decimal::ZERO),
            total_tips: self.total_tips.max(Decimal::ZERO),
            day_staff: self.day_staff.clone(),
            night_staff: self.night_staff.clone(),
        }
    }

    /// Returns the roster for the given shift.
    pub fn roster(&self, shift: Shift) -> &BTreeSet<String> {
        match shift {
            Shift::Day => &self.day_staff,
            Shift::Night => &self.night_staff,
        }
    }

    /// Returns the sales for the given shift.
    pub fn shift_sales(&self, shift: Shift) -> Decimal {
        match shift {
            Shift::Day => self.day_sales,
            Shift::Night => self.night_sales,
        }
    }

    /// Returns every staff member working either shift, without duplicates.
    pub fn all_staff(&self) -> BTreeSet<&str> {
        self.day_staff
            .iter()
            .chain(self.night_staff.iter())
            .map(String::as_str)
            .collect()
    }
}
