//! Staff tip-earning multipliers.
//!
//! A multiplier scales a staff member's head-count-equal share of a shift's
//! tip pool. Values are clamped into `[0.5, 2.0]` at the input boundary; the
//! distribution engine trusts whatever it is handed.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Mapping of staff name to multiplier, as persisted in the multiplier store.
pub type Multipliers = BTreeMap<String, Decimal>;

/// Returns the lowest permitted multiplier (0.5).
pub fn multiplier_min() -> Decimal {
    Decimal::new(5, 1)
}

/// Returns the highest permitted multiplier (2.0).
pub fn multiplier_max() -> Decimal {
    Decimal::new(20, 1)
}

/// Returns the multiplier assumed for staff with no stored value (1.0).
pub fn default_multiplier() -> Decimal {
    Decimal::ONE
}

/// Clamps a multiplier into `[0.5, 2.0]`.
///
/// # Examples
///
/// ```
/// use tip_pool_engine::models::clamp_multiplier;
/// use rust_decimal::Decimal;
///
/// assert_eq!(clamp_multiplier(Decimal::new(3, 0)), Decimal::new(20, 1));
/// assert_eq!(clamp_multiplier(Decimal::new(1, 1)), Decimal::new(5, 1));
/// assert_eq!(clamp_multiplier(Decimal::new(15, 1)), Decimal::new(15, 1));
/// ```
pub fn clamp_multiplier(rate: Decimal) -> Decimal {
    rate.clamp(multiplier_min(), multiplier_max())
}

/// A single staff member's effective multiplier, used for roster display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffMultiplier {
    /// The staff member's name.
    pub staff: String,
    /// The effective multiplier.
    pub rate: Decimal,
}

/// Resolves the multiplier for every named staff member.
///
/// Priority per name: the override, then the persisted value, then 1.0.
/// Every resolved value is clamped into `[0.5, 2.0]`.
///
/// # Examples
///
/// ```
/// use tip_pool_engine::models::{resolve_multipliers, Multipliers};
/// use rust_decimal::Decimal;
///
/// let mut persisted = Multipliers::new();
/// persisted.insert("Alice".to_string(), Decimal::new(15, 1));
///
/// let mut overrides = Multipliers::new();
/// overrides.insert("Bob".to_string(), Decimal::new(5, 0));
///
/// let resolved = resolve_multipliers(["Alice", "Bob", "Charlie"], &persisted, &overrides);
/// assert_eq!(resolved["Alice"], Decimal::new(15, 1));
/// assert_eq!(resolved["Bob"], Decimal::new(20, 1));
/// assert_eq!(resolved["Charlie"], Decimal::ONE);
/// ```
pub fn resolve_multipliers<'a, I>(
    staff: I,
    persisted: &Multipliers,
    overrides: &Multipliers,
) -> Multipliers
where
    I: IntoIterator<Item = &'a str>,
{
    staff
        .into_iter()
        .map(|name| {
            let rate = overrides
                .get(name)
                .or_else(|| persisted.get(name))
                .copied()
                .unwrap_or_else(default_multiplier);
            (name.to_string(), clamp_multiplier(rate))
        })
        .collect()
}
