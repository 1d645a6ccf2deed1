//! Tip distribution engine.
//!
//! This module contains the pure calculation functions: net tips after the
//! merchant's take, the sales-proportional tip rate, per-shift pools and the
//! final per-staff distribution. None of these functions fail; degenerate
//! inputs resolve to zero.

mod distribution;
mod net_tips;
mod shift_pool;

pub use distribution::{
    PAYOUT_DECIMAL_PLACES, TipDistribution, calculate_shift_payouts, distribute_tips,
    round_payout,
};
pub use net_tips::{calculate_net_tips, calculate_tip_rate};
pub use shift_pool::{ShiftPool, calculate_shift_pool};
