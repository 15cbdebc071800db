//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::FolderHashConfig;
use config::ConfigError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for `root` from files and environment.
    pub fn load(root: &Path) -> Result<FolderHashConfig, ConfigError> {
        MergeService::load(root)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<FolderHashConfig, ConfigError> {
        MergeService::load_from_file(path)
    }
}
