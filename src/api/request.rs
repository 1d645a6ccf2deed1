//! Request types for the Tip Pool API.
//!
//! This module defines the JSON request bodies and query strings accepted
//! by the API endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Multipliers, TipInputs};

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Fraction of tips retained by the merchant.
    pub merchant_take_rate: Decimal,
    /// Total sales across both shifts.
    pub total_sales: Decimal,
    /// Day shift sales.
    pub day_sales: Decimal,
    /// Night shift sales.
    pub night_sales: Decimal,
    /// Total tips before the merchant's take.
    pub total_tips: Decimal,
    /// Staff on the day shift.
    #[serde(default)]
    pub day_staff: Vec<String>,
    /// Staff on the night shift.
    #[serde(default)]
    pub night_staff: Vec<String>,
    /// Per-staff multiplier overrides for this calculation.
    #[serde(default)]
    pub multipliers: Multipliers,
}

impl CalculationRequest {
    /// Splits the request into engine inputs and multiplier overrides.
    pub fn into_parts(self) -> (TipInputs, Multipliers) {
        let inputs = TipInputs {
            merchant_take_rate: self.merchant_take_rate,
            total_sales: self.total_sales,
            day_sales: self.day_sales,
            night_sales: self.night_sales,
            total_tips: self.total_tips,
            day_staff: self.day_staff.into_iter().collect(),
            night_staff: self.night_staff.into_iter().collect(),
        };
        (inputs, self.multipliers)
    }
}

/// Request body for the multiplier update endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultiplierRequest {
    /// The new multiplier; clamped into `[0.5, 2.0]`.
    pub rate: Decimal,
}

/// Query string for the `/history` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryQuery {
    /// Window wire name; defaults to `current`.
    pub window: Option<String>,
}
