//! Per-shift tip pools.
//!
//! Each shift's pool is its sales multiplied by the tip rate. The pool is
//! split equally per head before multipliers are applied.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Shift;

/// A shift's tip pool and its equal per-head share.
///
/// # Example
///
/// ```
/// use tip_pool_engine::calculation::calculate_shift_pool;
/// use tip_pool_engine::models::Shift;
/// use rust_decimal::Decimal;
///
/// let pool = calculate_shift_pool(Shift::Day, Decimal::new(600, 0), Decimal::new(8, 2), 2);
/// assert_eq!(pool.pool, Decimal::new(48, 0));
/// assert_eq!(pool.per_head_share, Decimal::new(24, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftPool {
    /// The shift this pool belongs to.
    pub shift: Shift,
    /// Total tips attributable to the shift.
    pub pool: Decimal,
    /// Number of staff on the shift roster.
    pub head_count: usize,
    /// The pool divided by head count, or zero for an empty roster.
    pub per_head_share: Decimal,
}

/// Calculates a shift's pool and per-head share.
///
/// An empty roster yields a zero per-head share even when the pool is
/// non-zero; those tips are not distributed. A pool too large to represent
/// saturates at the decimal bounds.
pub fn calculate_shift_pool(
    shift: Shift,
    shift_sales: Decimal,
    tip_rate: Decimal,
    head_count: usize,
) -> ShiftPool {
    let pool = shift_sales.saturating_mul(tip_rate);
    let per_head_share = if head_count > 0 {
        pool / Decimal::from(head_count)
    } else {
        Decimal::ZERO
    };

    ShiftPool {
        shift,
        pool,
        head_count,
        per_head_share,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// SP-001: day pool split between two staff
    #[test]
    fn test_day_pool_split_two_ways() {
        let pool = calculate_shift_pool(Shift::Day, dec("600"), dec("0.08"), 2);
        assert_eq!(pool.pool, dec("48"));
        assert_eq!(pool.head_count, 2);
        assert_eq!(pool.per_head_share, dec("24"));
    }

    /// SP-002: single night staff takes the whole pool
    #[test]
    fn test_single_staff_takes_whole_pool() {
        let pool = calculate_shift_pool(Shift::Night, dec("400"), dec("0.08"), 1);
        assert_eq!(pool.pool, dec("32"));
        assert_eq!(pool.per_head_share, dec("32"));
    }

    /// SP-003: empty roster shares nothing
    #[test]
    fn test_empty_roster_shares_nothing() {
        let pool = calculate_shift_pool(Shift::Day, dec("600"), dec("0.08"), 0);
        assert_eq!(pool.pool, dec("48"));
        assert_eq!(pool.per_head_share, Decimal::ZERO);
    }

    /// SP-004: zero tip rate gives zero pool
    #[test]
    fn test_zero_tip_rate_gives_zero_pool() {
        let pool = calculate_shift_pool(Shift::Night, dec("400"), Decimal::ZERO, 3);
        assert_eq!(pool.pool, Decimal::ZERO);
        assert_eq!(pool.per_head_share, Decimal::ZERO);
    }

    /// SP-005: oversized pool saturates and still splits per head
    #[test]
    fn test_oversized_pool_saturates() {
        let pool = calculate_shift_pool(Shift::Day, dec("1000000"), Decimal::MAX, 2);
        assert_eq!(pool.pool, Decimal::MAX);
        assert_eq!(pool.per_head_share, Decimal::MAX / Decimal::TWO);
    }

    #[test]
    fn test_three_way_split_is_unrounded() {
        let pool = calculate_shift_pool(Shift::Day, dec("100"), dec("0.1"), 3);
        assert_eq!(pool.pool, dec("10"));
        assert!(pool.per_head_share > dec("3.333"));
        assert!(pool.per_head_share < dec("3.334"));
    }
}
