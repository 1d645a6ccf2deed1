//! Persistent storage for multipliers and calculation history.
//!
//! The [`TipStore`] trait is the seam the service depends on. [`JsonFileStore`]
//! keeps each collection in its own JSON file.
//!
//! Reads never fail: a missing, empty or corrupt file is treated as an empty
//! collection. Writes replace the whole file atomically.
//!
//! `append_history` is a read-modify-write of the whole history file. Two
//! concurrent appends can lose one record, so callers sharing a store across
//! tasks must serialize writes through a single writer.

mod json_file;

pub use json_file::JsonFileStore;

use crate::error::EngineResult;
use crate::models::{CalculationRecord, Multipliers};

/// Storage for staff multipliers and the append-only calculation history.
pub trait TipStore: Send + Sync {
    /// Returns the last saved multipliers, or an empty mapping if none are readable.
    fn load_multipliers(&self) -> Multipliers;

    /// Replaces the saved multipliers with `multipliers`.
    fn save_multipliers(&self, multipliers: &Multipliers) -> EngineResult<()>;

    /// Returns the calculation history, oldest first, or empty if none is readable.
    fn load_history(&self) -> Vec<CalculationRecord>;

    /// Appends `record` to the end of the history.
    fn append_history(&self, record: &CalculationRecord) -> EngineResult<()>;
}
