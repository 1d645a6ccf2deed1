//! Configuration types.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file.

use std::net::SocketAddr;
use std::path::PathBuf;

use serde::Deserialize;

/// The fixed staff roster offered to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RosterConfig {
    /// Staff names, in display order.
    pub staff: Vec<String>,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            staff: [
                "Alice", "Bob", "Charlie", "David", "Emma", "Frank", "Grace", "Helen",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
        }
    }
}

/// Locations of the two JSON store files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the staff multiplier file.
    pub multipliers_path: PathBuf,
    /// Path to the calculation history file.
    pub history_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            multipliers_path: PathBuf::from("data/staff_tip_rates.json"),
            history_path: PathBuf::from("data/tip_history.json"),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the API listens on.
    pub bind_address: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([127, 0, 0, 1], 8080)),
        }
    }
}

/// The complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// The staff roster.
    #[serde(default)]
    pub roster: RosterConfig,
    /// Store file locations.
    #[serde(default)]
    pub storage: StorageConfig,
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
}
