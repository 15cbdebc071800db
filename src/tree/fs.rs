//! Filesystem access: entry classification, file reads, and child listing
//!
//! The hash engine only touches the filesystem through [`FileSystem`], so a
//! different tree source can stand in for the local disk.

use crate::error::HashError;
use crate::tree::path::utf8_name;
use crate::types::EntryKind;
use std::path::Path;
use walkdir::WalkDir;

/// Narrow read-only interface consumed by the hash engine
pub trait FileSystem: Send + Sync {
    /// Report whether `path` is a file or a directory
    ///
    /// Fails with `NotFound` if nothing exists at `path`, or with an
    /// unreadable error if it cannot be inspected or is neither kind.
    fn classify(&self, path: &Path) -> Result<EntryKind, HashError>;

    /// Read the full byte content of a file
    fn read_file(&self, path: &Path) -> Result<Vec<u8>, HashError>;

    /// List the names of the immediate children of a directory
    ///
    /// Order is unspecified; callers sort. A child whose name is not valid
    /// UTF-8 fails the listing with `InvalidName`.
    fn list_children(&self, path: &Path) -> Result<Vec<String>, HashError>;
}

/// [`FileSystem`] backed by the local disk
#[derive(Debug, Clone)]
pub struct LocalFileSystem {
    /// Whether symbolic links are classified by their target (default: true)
    follow_symlinks: bool,
}

impl LocalFileSystem {
    pub fn new() -> Self {
        Self {
            follow_symlinks: true,
        }
    }

    pub fn with_follow_symlinks(follow_symlinks: bool) -> Self {
        Self { follow_symlinks }
    }
}

impl Default for LocalFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for LocalFileSystem {
    fn classify(&self, path: &Path) -> Result<EntryKind, HashError> {
        let metadata = if self.follow_symlinks {
            std::fs::metadata(path)
        } else {
            std::fs::symlink_metadata(path)
        }
        .map_err(|e| HashError::from_io(path, e))?;

        if metadata.is_file() {
            Ok(EntryKind::File)
        } else if metadata.is_dir() {
            Ok(EntryKind::Directory)
        } else {
            // Symlinks when not following them, sockets, FIFOs, devices
            Err(HashError::Unreadable {
                path: path.to_path_buf(),
                reason: "unsupported entry type".to_string(),
            })
        }
    }

    fn read_file(&self, path: &Path) -> Result<Vec<u8>, HashError> {
        std::fs::read(path).map_err(|e| HashError::from_io(path, e))
    }

    fn list_children(&self, path: &Path) -> Result<Vec<String>, HashError> {
        let mut names = Vec::new();

        // Names only: links among the children are resolved by `classify`
        let walker = WalkDir::new(path)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false);

        for entry in walker {
            let entry = entry.map_err(|e| {
                let failed_path = e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| path.to_path_buf());
                match e.into_io_error() {
                    Some(io) => HashError::from_io(failed_path, io),
                    None => HashError::Unreadable {
                        path: failed_path,
                        reason: "filesystem loop detected".to_string(),
                    },
                }
            })?;

            let name = utf8_name(entry.file_name(), entry.path())?;
            names.push(name.to_string());
        }

        Ok(names)
    }
}
