//! Calculation records stored in the history.
//!
//! A [`CalculationRecord`] is created once per successful calculation and is
//! never modified afterwards. Its JSON shape is the history file format.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Mapping of staff name to final payout, rounded to 2 decimal places.
pub type TipsDistribution = BTreeMap<String, Decimal>;

/// The immutable outcome of one tip calculation.
///
/// # Example
///
/// ```
/// use tip_pool_engine::models::{CalculationRecord, TipsDistribution};
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let mut tips = TipsDistribution::new();
/// tips.insert("Alice".to_string(), Decimal::new(2400, 2));
///
/// let record = CalculationRecord {
///     timestamp: NaiveDateTime::parse_from_str("2026-01-15 21:30:00", "%Y-%m-%d %H:%M:%S").unwrap(),
///     merchant_take_rate: Decimal::new(2, 1),
///     total_tips_distributed: Decimal::new(80, 0),
///     tips_distribution: tips,
/// };
/// assert_eq!(record.total_paid_out(), Decimal::new(2400, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationRecord {
    /// When the calculation ran, in local time.
    pub timestamp: NaiveDateTime,
    /// The merchant take rate used.
    pub merchant_take_rate: Decimal,
    /// Net tips after the merchant's take.
    pub total_tips_distributed: Decimal,
    /// Final payout per staff member.
    pub tips_distribution: TipsDistribution,
}

impl CalculationRecord {
    /// Returns the sum of all payouts in this record.
    ///
    /// This may differ from `total_tips_distributed` by rounding and by
    /// multipliers other than 1.0. The sum saturates at `Decimal::MAX`.
    pub fn total_paid_out(&self) -> Decimal {
        self.tips_distribution
            .values()
            .fold(Decimal::ZERO, |total, payout| total.saturating_add(*payout))
    }
}
