//! Configuration loading for the Tip Pool Engine.
//!
//! This module loads the staff roster, store file locations and server
//! settings from a YAML file. Every section is optional and falls back to
//! the defaults a single restaurant starts with.
//!
//! # Example
//!
//! ```no_run
//! use tip_pool_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/tip_pool.yaml").unwrap();
//! println!("History file: {}", config.storage().history_path.display());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, RosterConfig, ServerConfig, StorageConfig};
