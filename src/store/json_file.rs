//! JSON file backed store.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::config::StorageConfig;
use crate::error::{EngineError, EngineResult};
use crate::models::{CalculationRecord, Multipliers};

use super::TipStore;

/// Stores multipliers as a JSON object and history as a JSON array.
///
/// # Example
///
/// ```no_run
/// use tip_pool_engine::store::{JsonFileStore, TipStore};
///
/// let store = JsonFileStore::new("data/staff_tip_rates.json", "data/tip_history.json");
/// let multipliers = store.load_multipliers();
/// println!("{} staff multipliers saved", multipliers.len());
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    multipliers_path: PathBuf,
    history_path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store over the two given file paths.
    pub fn new(multipliers_path: impl Into<PathBuf>, history_path: impl Into<PathBuf>) -> Self {
        Self {
            multipliers_path: multipliers_path.into(),
            history_path: history_path.into(),
        }
    }

    /// Creates a store from the storage section of the configuration.
    pub fn from_config(storage: &StorageConfig) -> Self {
        Self::new(storage.multipliers_path.clone(), storage.history_path.clone())
    }

    /// Returns the multiplier file path.
    pub fn multipliers_path(&self) -> &Path {
        &self.multipliers_path
    }

    /// Returns the history file path.
    pub fn history_path(&self) -> &Path {
        &self.history_path
    }

    /// Reads a JSON file, falling back to the default value when the file is
    /// missing, empty or unparseable.
    fn read_json<T: DeserializeOwned + Default>(path: &Path) -> T {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "Store file absent, starting empty");
                return T::default();
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "Store file unreadable, treating as empty");
                return T::default();
            }
        };

        if content.trim().is_empty() {
            return T::default();
        }

        serde_json::from_str(&content).unwrap_or_else(|err| {
            warn!(path = %path.display(), error = %err, "Store file corrupt, treating as empty");
            T::default()
        })
    }

    /// Writes a value as JSON, replacing the file in a single rename.
    fn write_json<T: Serialize>(path: &Path, value: &T) -> EngineResult<()> {
        let write_error = |message: String| EngineError::StorageWrite {
            path: path.display().to_string(),
            message,
        };

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| write_error(e.to_string()))?;

        let mut file = NamedTempFile::new_in(dir).map_err(|e| write_error(e.to_string()))?;
        serde_json::to_writer(&mut file, value).map_err(|e| write_error(e.to_string()))?;
        file.flush().map_err(|e| write_error(e.to_string()))?;
        file.persist(path)
            .map_err(|e| write_error(e.error.to_string()))?;

        Ok(())
    }
}

impl TipStore for JsonFileStore {
    fn load_multipliers(&self) -> Multipliers {
        Self::read_json(&self.multipliers_path)
    }

    fn save_multipliers(&self, multipliers: &Multipliers) -> EngineResult<()> {
        Self::write_json(&self.multipliers_path, multipliers)
    }

    fn load_history(&self) -> Vec<CalculationRecord> {
        Self::read_json(&self.history_path)
    }

    fn append_history(&self, record: &CalculationRecord) -> EngineResult<()> {
        let mut history = self.load_history();
        history.push(record.clone());
        Self::write_json(&self.history_path, &history)
    }
}
