//! Merge rules: defaults, override order, conflict handling.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("hashing.follow_symlinks", true)?
        .set_default("hashing.normalize_unicode", true)?
        .set_default("logging.level", "info")?
        .set_default("logging.format", "text")
}
