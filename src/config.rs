//! Configuration System
//!
//! Layered configuration for hashing options and logging. Sources are merged
//! from built-in defaults, a global config file, a per-root config file, and
//! `FOLDER_HASH_*` environment variables.

use crate::error::ConfigError;
use crate::logging::LoggingConfig;
use crate::tree::builder::HashOptions;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::environment::ENV_PREFIX;
pub use sources::global_file::global_config_path;
pub use sources::workspace_file::{workspace_config_path, WORKSPACE_CONFIG_FILE};

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FolderHashConfig {
    /// Hashing options
    #[serde(default)]
    pub hashing: HashOptions,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl FolderHashConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if let Err(e) = self.hashing.validate() {
            errors.push(format!("hashing: {}", e));
        }
        if let Err(e) = self.logging.validate() {
            errors.push(format!("logging: {}", e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(errors.join("; ")))
        }
    }
}
