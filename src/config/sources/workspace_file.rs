//! Root config file source: <root>/.folder-hash.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::{Path, PathBuf};

/// File name looked up in the directory being hashed
pub const WORKSPACE_CONFIG_FILE: &str = ".folder-hash.toml";

pub fn workspace_config_path(root: &Path) -> PathBuf {
    root.join(WORKSPACE_CONFIG_FILE)
}

/// Add the root config file to builder if it exists.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let config_path = workspace_config_path(root);
    if config_path.exists() {
        return Ok(builder.add_source(File::from(config_path.as_path()).required(false)));
    }
    Ok(builder)
}
