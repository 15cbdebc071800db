//! Environment variable source: FOLDER_HASH_* prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Environment variable prefix for every configuration key
pub const ENV_PREFIX: &str = "FOLDER_HASH";

/// Build the environment source.
/// `FOLDER_HASH_HASHING__IGNORE_PATTERNS=.git,target` sets a list.
pub fn source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("hashing.ignore_patterns")
        .try_parsing(true)
}

/// Add environment variable overlay to builder.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(builder.add_source(source()))
}
