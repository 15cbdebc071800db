//! Hash result tree

use crate::types::Digest;
use serde::{Deserialize, Serialize};
use std::path::{Component, Path};

/// Hash of one entry, mirroring the shape of the hashed tree
///
/// Serializes as `{ "name": ..., "hash": ..., "children": [...] }` with
/// `children` omitted for files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashResult {
    /// Base name of the entry
    pub name: String,
    /// Lowercase hex digest
    pub hash: String,
    /// Children sorted by name; `None` for files, `Some` (possibly empty) for directories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<HashResult>>,
}

impl HashResult {
    pub fn file(name: String, digest: &Digest) -> Self {
        Self {
            name,
            hash: hex::encode(digest),
            children: None,
        }
    }

    pub fn directory(name: String, digest: &Digest, children: Vec<HashResult>) -> Self {
        Self {
            name,
            hash: hex::encode(digest),
            children: Some(children),
        }
    }

    pub fn is_directory(&self) -> bool {
        self.children.is_some()
    }

    /// Decode `hash` back to raw digest bytes
    ///
    /// Returns None if `hash` is not a 64-character hex string, which can only
    /// happen for results deserialized from elsewhere.
    pub fn digest(&self) -> Option<Digest> {
        let bytes = hex::decode(&self.hash).ok()?;
        bytes.try_into().ok()
    }

    /// Look up a descendant by a path relative to this entry
    ///
    /// `find("")` and `find(".")` return `self`.
    pub fn find(&self, relative: impl AsRef<Path>) -> Option<&HashResult> {
        let mut current = self;
        for component in relative.as_ref().components() {
            match component {
                Component::CurDir => continue,
                Component::Normal(name) => {
                    let name = name.to_str()?;
                    current = current
                        .children
                        .as_ref()?
                        .iter()
                        .find(|child| child.name == name)?;
                }
                _ => return None,
            }
        }
        Some(current)
    }

    /// Number of entries in this tree, including `self`
    pub fn entry_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .flatten()
            .map(HashResult::entry_count)
            .sum::<usize>()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
