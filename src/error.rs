//! Error types for the Tip Pool Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The distribution engine itself never fails; errors only come from
//! configuration loading, writing the stores, and producing exports.

use thiserror::Error;

/// The main error type for the Tip Pool Engine.
///
/// # Example
///
/// ```
/// use tip_pool_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/tip_pool.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/tip_pool.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A store file could not be written.
    #[error("Failed to write store '{path}': {message}")]
    StorageWrite {
        /// The store file that failed to write.
        path: String,
        /// A description of the I/O or serialization failure.
        message: String,
    },

    /// The spreadsheet export could not be produced.
    #[error("Export failed: {message}")]
    ExportFailed {
        /// A description of the export failure.
        message: String,
    },

    /// A time window matched no history records, so there is nothing to export.
    #[error("No calculations recorded for window '{window}'")]
    NoRecordsForWindow {
        /// The wire name of the empty window.
        window: String,
    },

    /// A time window name was not recognised.
    #[error("Unknown time window: {value}")]
    UnknownTimeWindow {
        /// The value that failed to parse.
        value: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
