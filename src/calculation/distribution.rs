//! Tip distribution across day and night shifts.
//!
//! This module turns a [`TipInputs`] and a multiplier mapping into the final
//! per-staff payouts. Each shift is handled independently: the shift pool is
//! split equally per head, scaled by the staff member's multiplier, and
//! rounded to cents. Staff on both shifts receive the sum of their two
//! rounded shift payouts. Staff on neither shift are absent from the result.
//!
//! Degenerate inputs never fail. Zero total sales or an empty roster resolve
//! to zero payouts, and amounts too large to represent saturate at the
//! decimal bounds rather than overflowing.

use chrono::NaiveDateTime;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{
    CalculationRecord, Multipliers, Shift, TipInputs, TipsDistribution, default_multiplier,
};

use super::net_tips::{calculate_net_tips, calculate_tip_rate};
use super::shift_pool::{ShiftPool, calculate_shift_pool};

/// Number of decimal places payouts are rounded to.
pub const PAYOUT_DECIMAL_PLACES: u32 = 2;

/// Rounds a payout to cents using banker's rounding (half to even).
///
/// # Examples
///
/// ```
/// use tip_pool_engine::calculation::round_payout;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_payout(Decimal::from_str("2.345").unwrap()), Decimal::from_str("2.34").unwrap());
/// assert_eq!(round_payout(Decimal::from_str("2.355").unwrap()), Decimal::from_str("2.36").unwrap());
/// ```
pub fn round_payout(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(PAYOUT_DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven)
}

/// The full outcome of a distribution, including intermediate figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TipDistribution {
    /// Tips remaining after the merchant's take.
    pub net_tips: Decimal,
    /// Net tips per unit of sales.
    pub tip_rate: Decimal,
    /// The day shift pool and per-head share.
    pub day: ShiftPool,
    /// The night shift pool and per-head share.
    pub night: ShiftPool,
    /// Final payout per staff member.
    pub payouts: TipsDistribution,
}

impl TipDistribution {
    /// Builds the immutable history record for this distribution.
    pub fn into_record(
        self,
        merchant_take_rate: Decimal,
        timestamp: NaiveDateTime,
    ) -> CalculationRecord {
        CalculationRecord {
            timestamp,
            merchant_take_rate,
            total_tips_distributed: self.net_tips,
            tips_distribution: self.payouts,
        }
    }
}

/// Returns each rostered staff member's rounded payout for one shift.
///
/// Staff missing from `multipliers` are paid at 1.0.
pub fn calculate_shift_payouts<'a, I>(
    pool: &ShiftPool,
    roster: I,
    multipliers: &Multipliers,
) -> TipsDistribution
where
    I: IntoIterator<Item = &'a String>,
{
    roster
        .into_iter()
        .map(|staff| {
            let multiplier = multipliers
                .get(staff)
                .copied()
                .unwrap_or_else(default_multiplier);
            let share = pool.per_head_share.saturating_mul(multiplier);
            (staff.clone(), round_payout(share))
        })
        .collect()
}

/// Distributes pooled tips across the day and night rosters.
///
/// The inputs are used as given; clamp them at the boundary first with
/// [`TipInputs::clamped`].
///
/// # Examples
///
/// ```
/// use tip_pool_engine::calculation::distribute_tips;
/// use tip_pool_engine::models::{Multipliers, TipInputs};
/// use rust_decimal::Decimal;
///
/// let inputs = TipInputs {
///     merchant_take_rate: Decimal::new(2, 1),
///     total_sales: Decimal::new(1000, 0),
///     day_sales: Decimal::new(600, 0),
///     night_sales: Decimal::new(400, 0),
///     total_tips: Decimal::new(100, 0),
///     day_staff: ["Alice".to_string(), "Bob".to_string()].into(),
///     night_staff: ["Bob".to_string()].into(),
/// };
///
/// let result = distribute_tips(&inputs, &Multipliers::new());
/// assert_eq!(result.net_tips, Decimal::new(80, 0));
/// assert_eq!(result.payouts["Alice"], Decimal::new(24, 0));
/// assert_eq!(result.payouts["Bob"], Decimal::new(56, 0));
/// ```
pub fn distribute_tips(inputs: &TipInputs, multipliers: &Multipliers) -> TipDistribution {
    let net_tips = calculate_net_tips(inputs.total_tips, inputs.merchant_take_rate);
    let tip_rate = calculate_tip_rate(net_tips, inputs.total_sales);

    let day = calculate_shift_pool(
        Shift::Day,
        inputs.shift_sales(Shift::Day),
        tip_rate,
        inputs.roster(Shift::Day).len(),
    );
    let night = calculate_shift_pool(
        Shift::Night,
        inputs.shift_sales(Shift::Night),
        tip_rate,
        inputs.roster(Shift::Night).len(),
    );

    let mut payouts = TipsDistribution::new();
    for pool in [&day, &night] {
        debug!(
            shift = %pool.shift,
            pool = %pool.pool,
            head_count = pool.head_count,
            per_head_share = %pool.per_head_share,
            "Shift pool calculated"
        );
        for (staff, payout) in calculate_shift_payouts(pool, inputs.roster(pool.shift), multipliers)
        {
            let total = payouts.entry(staff).or_insert(Decimal::ZERO);
            *total = total.saturating_add(payout);
        }
    }

    TipDistribution {
        net_tips,
        tip_rate,
        day,
        night,
        payouts,
    }
}
