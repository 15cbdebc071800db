//! Public hashing API
//!
//! Free functions hash with default options. [`FolderHasher`] carries
//! options loaded from configuration and an optional cancellation token.

use crate::concurrency::CancellationToken;
use crate::config::{ConfigLoader, FolderHashConfig};
use crate::error::{ConfigError, HashError};
use crate::tree::builder::{HashEngine, HashOptions};
use crate::tree::node::HashResult;
use std::path::Path;

/// Hash the entry `name` in `base_path` with default options
pub fn hash_element(name: &str, base_path: impl AsRef<Path>) -> Result<HashResult, HashError> {
    HashEngine::new(HashOptions::default()).hash_element(name, base_path)
}

/// Async form of [`hash_element`]; resolves to the same result
pub async fn hash_element_async(
    name: &str,
    base_path: impl AsRef<Path>,
) -> Result<HashResult, HashError> {
    HashEngine::new(HashOptions::default()).hash_element_async(name, base_path).await
}

/// Hash the entry at `path`, using its last component as the name
pub fn hash_path(path: impl AsRef<Path>) -> Result<HashResult, HashError> {
    HashEngine::new(HashOptions::default()).hash_path(path)
}

/// Configured hasher over the local filesystem
#[derive(Clone)]
pub struct FolderHasher {
    engine: HashEngine,
}

impl FolderHasher {
    pub fn new(options: HashOptions) -> Self {
        Self {
            engine: HashEngine::new(options),
        }
    }

    /// Build a hasher from an already loaded configuration
    pub fn from_config(config: &FolderHashConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config.hashing.clone()))
    }

    /// Load configuration for `root` (global file, root file, environment) and build a hasher
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let config = ConfigLoader::load(root)?;
        Self::from_config(&config)
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.engine = self.engine.with_cancellation(token);
        self
    }

    pub fn options(&self) -> &HashOptions {
        self.engine.options()
    }

    pub fn hash_element(
        &self,
        name: &str,
        base_path: impl AsRef<Path>,
    ) -> Result<HashResult, HashError> {
        self.engine.hash_element(name, base_path)
    }

    pub async fn hash_element_async(
        &self,
        name: &str,
        base_path: impl AsRef<Path>,
    ) -> Result<HashResult, HashError> {
        self.engine.hash_element_async(name, base_path).await
    }

    pub fn hash_path(&self, path: impl AsRef<Path>) -> Result<HashResult, HashError> {
        self.engine.hash_path(path)
    }
}

impl Default for FolderHasher {
    fn default() -> Self {
        Self::new(HashOptions::default())
    }
}
