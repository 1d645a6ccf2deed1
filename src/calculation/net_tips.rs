//! Net tips and tip rate.
//!
//! Net tips are what remains after the merchant's take. The tip rate spreads
//! net tips over total sales so each shift's pool tracks its share of sales.
//!
//! Arithmetic saturates at `Decimal::MAX` / `Decimal::MIN` instead of
//! overflowing, so extreme magnitudes never abort a calculation.

use rust_decimal::Decimal;

/// Returns the tips remaining after the merchant's cut.
///
/// `net = total_tips * (1 - merchant_take_rate)`
///
/// # Examples
///
/// ```
/// use tip_pool_engine::calculation::calculate_net_tips;
/// use rust_decimal::Decimal;
///
/// let net = calculate_net_tips(Decimal::new(100, 0), Decimal::new(2, 1));
/// assert_eq!(net, Decimal::new(80, 0));
/// ```
pub fn calculate_net_tips(total_tips: Decimal, merchant_take_rate: Decimal) -> Decimal {
    total_tips.saturating_mul(Decimal::ONE.saturating_sub(merchant_take_rate))
}

/// Returns net tips per unit of sales, or zero when there were no sales.
///
/// A quotient too large to represent saturates at the decimal bounds.
///
/// # Examples
///
/// ```
/// use tip_pool_engine::calculation::calculate_tip_rate;
/// use rust_decimal::Decimal;
///
/// assert_eq!(
///     calculate_tip_rate(Decimal::new(80, 0), Decimal::new(1000, 0)),
///     Decimal::new(8, 2)
/// );
/// assert_eq!(calculate_tip_rate(Decimal::new(80, 0), Decimal::ZERO), Decimal::ZERO);
/// ```
pub fn calculate_tip_rate(net_tips: Decimal, total_sales: Decimal) -> Decimal {
    if total_sales > Decimal::ZERO {
        net_tips
            .checked_div(total_sales)
            .unwrap_or_else(|| saturated(net_tips))
    } else {
        Decimal::ZERO
    }
}

/// The bound an overflowing result with the sign of `value` saturates to.
fn saturated(value: Decimal) -> Decimal {
    if value.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// NT-001: 20% take on 100 tips
    #[test]
    fn test_twenty_percent_take() {
        assert_eq!(calculate_net_tips(dec("100"), dec("0.2")), dec("80"));
    }

    /// NT-002: zero take keeps all tips
    #[test]
    fn test_zero_take_keeps_all_tips() {
        assert_eq!(calculate_net_tips(dec("50"), Decimal::ZERO), dec("50"));
    }

    /// NT-003: full take leaves nothing
    #[test]
    fn test_full_take_leaves_nothing() {
        assert_eq!(calculate_net_tips(dec("50"), Decimal::ONE), Decimal::ZERO);
    }

    #[test]
    fn test_tip_rate_with_sales() {
        assert_eq!(calculate_tip_rate(dec("80"), dec("1000")), dec("0.08"));
    }

    #[test]
    fn test_tip_rate_zero_sales_is_zero() {
        assert_eq!(calculate_tip_rate(dec("80"), Decimal::ZERO), Decimal::ZERO);
    }

    /// NT-004: huge tips over tiny sales saturate instead of overflowing
    #[test]
    fn test_tip_rate_saturates_on_overflow() {
        let rate = calculate_tip_rate(dec("100000000000000000000000"), dec("0.000001"));
        assert_eq!(rate, Decimal::MAX);
    }

    #[test]
    fn test_net_tips_saturates_on_overflow() {
        assert_eq!(calculate_net_tips(Decimal::MAX, dec("-1")), Decimal::MAX);
    }

    proptest! {
        #[test]
        fn prop_net_tips_never_exceed_total(
            tips_cents in 0i64..10_000_000,
            take_pct in 0i64..=100,
        ) {
            let total_tips = Decimal::new(tips_cents, 2);
            let take = Decimal::new(take_pct, 2);
            let net = calculate_net_tips(total_tips, take);

            prop_assert_eq!(net, total_tips * (Decimal::ONE - take));
            prop_assert!(net <= total_tips);
            prop_assert!(net >= Decimal::ZERO);
        }
    }
}
