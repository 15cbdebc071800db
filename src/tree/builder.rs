//! Hash engine: recursive digests for files and directory trees

use crate::concurrency::CancellationToken;
use crate::error::HashError;
use crate::tree::fs::{FileSystem, LocalFileSystem};
use crate::tree::hasher;
use crate::tree::node::HashResult;
use crate::tree::path;
use crate::types::{Digest, EntryKind};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, instrument, trace};

/// Hashing options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashOptions {
    /// Child names to skip (exact match on the entry name, compared after
    /// normalization when `normalize_unicode` is set)
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
    /// Classify symbolic links by their target (default: true)
    ///
    /// Applied by [`HashEngine::new`] to its `LocalFileSystem`. An engine
    /// built with [`HashEngine::with_filesystem`] leaves link handling to the
    /// supplied filesystem and ignores this flag.
    #[serde(default = "default_true")]
    pub follow_symlinks: bool,
    /// NFC-normalize names before hashing and sorting (default: true)
    #[serde(default = "default_true")]
    pub normalize_unicode: bool,
    /// Maximum recursion depth; the hashed entry itself is depth 0 (None = unlimited)
    #[serde(default)]
    pub max_depth: Option<usize>,
}

fn default_true() -> bool {
    true
}

impl Default for HashOptions {
    fn default() -> Self {
        Self {
            ignore_patterns: Vec::new(),
            follow_symlinks: default_true(),
            normalize_unicode: default_true(),
            max_depth: None,
        }
    }
}

impl HashOptions {
    /// Validate option values
    pub fn validate(&self) -> Result<(), String> {
        for pattern in &self.ignore_patterns {
            if pattern.is_empty() {
                return Err("Ignore pattern cannot be empty".to_string());
            }
            if pattern.contains('/') || pattern.contains(std::path::MAIN_SEPARATOR) {
                return Err(format!(
                    "Ignore pattern '{}' must be a single entry name",
                    pattern
                ));
            }
        }
        Ok(())
    }

    fn should_ignore(&self, name: &str) -> bool {
        if self.ignore_patterns.is_empty() {
            return false;
        }
        let name = path::normalize_name(name, self.normalize_unicode);
        self.ignore_patterns
            .iter()
            .any(|pattern| path::normalize_name(pattern, self.normalize_unicode) == name)
    }
}

/// Hash engine over a [`FileSystem`]
///
/// Each call owns its traversal; an engine can be shared and cloned freely.
pub struct HashEngine<F: FileSystem = LocalFileSystem> {
    fs: Arc<F>,
    options: HashOptions,
    cancel: Option<CancellationToken>,
}

impl<F: FileSystem> Clone for HashEngine<F> {
    fn clone(&self) -> Self {
        Self {
            fs: Arc::clone(&self.fs),
            options: self.options.clone(),
            cancel: self.cancel.clone(),
        }
    }
}

impl HashEngine<LocalFileSystem> {
    /// Create an engine over the local disk
    pub fn new(options: HashOptions) -> Self {
        let fs = LocalFileSystem::with_follow_symlinks(options.follow_symlinks);
        Self::with_filesystem(fs, options)
    }
}

impl Default for HashEngine<LocalFileSystem> {
    fn default() -> Self {
        Self::new(HashOptions::default())
    }
}

impl<F: FileSystem> HashEngine<F> {
    /// Create an engine over a custom filesystem
    ///
    /// `options.follow_symlinks` has no effect here; symlink handling is up
    /// to `fs`.
    pub fn with_filesystem(fs: F, options: HashOptions) -> Self {
        Self {
            fs: Arc::new(fs),
            options,
            cancel: None,
        }
    }

    /// Attach a cancellation token checked before every entry
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn options(&self) -> &HashOptions {
        &self.options
    }

    /// Hash the entry `name` located in `base_path`
    ///
    /// Files hash their name and bytes; directories hash their name and the
    /// hashes of their children, sorted by name. Any failure anywhere in the
    /// tree aborts the call.
    #[instrument(skip(self, base_path), fields(base = %base_path.as_ref().display()))]
    pub fn hash_element(
        &self,
        name: &str,
        base_path: impl AsRef<Path>,
    ) -> Result<HashResult, HashError> {
        let start = Instant::now();
        info!("Starting hash");

        let entry_path = path::resolve(base_path.as_ref(), name)?;
        let (digest, result) = match self.hash_entry(name, &entry_path, 0) {
            Ok(hashed) => hashed,
            Err(e) => {
                error!("Hashing failed: {}", e);
                return Err(e);
            }
        };

        let duration = start.elapsed();
        info!(
            entry_count = result.entry_count(),
            hash = %hasher::to_hex(&digest),
            duration_ms = duration.as_millis(),
            "Hash completed"
        );

        Ok(result)
    }

    /// Hash the entry at a full path, using its last component as the name
    pub fn hash_path(&self, full_path: impl AsRef<Path>) -> Result<HashResult, HashError> {
        let (base_path, name) = path::split_path(full_path.as_ref())?;
        self.hash_element(&name, base_path)
    }

    fn hash_entry(
        &self,
        name: &str,
        entry_path: &Path,
        depth: usize,
    ) -> Result<(Digest, HashResult), HashError> {
        if self.cancel.as_ref().is_some_and(|t| t.is_cancelled()) {
            return Err(HashError::Cancelled);
        }
        if let Some(max_depth) = self.options.max_depth {
            if depth > max_depth {
                return Err(HashError::DepthExceeded {
                    path: entry_path.to_path_buf(),
                    max_depth,
                });
            }
        }

        let name = path::normalize_name(name, self.options.normalize_unicode);
        match self.fs.classify(entry_path)? {
            EntryKind::File => self.hash_file(name, entry_path),
            EntryKind::Directory => self.hash_directory(name, entry_path, depth),
        }
    }

    fn hash_file(&self, name: String, file_path: &Path) -> Result<(Digest, HashResult), HashError> {
        let content = self.fs.read_file(file_path)?;
        let digest = hasher::compute_file_digest(&name, &content);
        trace!(
            path = %file_path.display(),
            size = content.len(),
            digest = %hasher::to_hex(&digest),
            "Hashed file"
        );
        Ok((digest, HashResult::file(name, &digest)))
    }

    fn hash_directory(
        &self,
        name: String,
        dir_path: &Path,
        depth: usize,
    ) -> Result<(Digest, HashResult), HashError> {
        let child_names = self.fs.list_children(dir_path)?;

        // Every child must finish before the directory digest is combined
        let mut children = Vec::with_capacity(child_names.len());
        for child_name in child_names {
            if self.options.should_ignore(&child_name) {
                trace!(name = %child_name, "Ignoring entry");
                continue;
            }
            let child_path = dir_path.join(&child_name);
            children.push(self.hash_entry(&child_name, &child_path, depth + 1)?);
        }

        // Listing order is OS-dependent; digest breaks ties between names
        // that only became equal after normalization
        children.sort_by(|(digest_a, a), (digest_b, b)| {
            a.name.cmp(&b.name).then_with(|| digest_a.cmp(digest_b))
        });

        let child_digests: Vec<Digest> = children.iter().map(|(digest, _)| *digest).collect();
        let digest = hasher::compute_directory_digest(&name, &child_digests);
        debug!(
            path = %dir_path.display(),
            child_count = child_digests.len(),
            digest = %hasher::to_hex(&digest),
            "Hashed directory"
        );

        let children = children.into_iter().map(|(_, child)| child).collect();
        Ok((digest, HashResult::directory(name, &digest, children)))
    }
}

impl<F: FileSystem + 'static> HashEngine<F> {
    /// Async form of [`HashEngine::hash_element`]
    ///
    /// Runs the same computation on a blocking task, so both forms return
    /// identical results for the same inputs.
    pub async fn hash_element_async(
        &self,
        name: &str,
        base_path: impl AsRef<Path>,
    ) -> Result<HashResult, HashError> {
        let engine = self.clone();
        let name = name.to_string();
        let base_path = base_path.as_ref().to_path_buf();

        tokio::task::spawn_blocking(move || engine.hash_element(&name, base_path))
            .await
            .map_err(|e| HashError::TaskFailed(e.to_string()))?
    }
}
