//! Core data models for the Tip Pool Engine.
//!
//! This module contains the domain models used throughout the engine.

mod calculation_record;
mod multiplier;
mod tip_inputs;

pub use calculation_record::{CalculationRecord, TipsDistribution};
pub use multiplier::{
    Multipliers, StaffMultiplier, clamp_multiplier, default_multiplier, multiplier_max,
    multiplier_min, resolve_multipliers,
};
pub use tip_inputs::{Shift, TipInputs, clamp_take_rate};
