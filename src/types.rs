//! Core types shared by the classifier and the hash engine.

use serde::{Deserialize, Serialize};

/// Digest: raw 256-bit BLAKE3 output for a file or directory entry
pub type Digest = [u8; 32];

/// Kind of a filesystem entry, as reported by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

impl EntryKind {
    /// Domain tag mixed into every digest so a file and a directory never collide
    pub fn tag(&self) -> &'static [u8] {
        match self {
            EntryKind::File => b"file",
            EntryKind::Directory => b"directory",
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryKind::File => write!(f, "file"),
            EntryKind::Directory => write!(f, "directory"),
        }
    }
}
