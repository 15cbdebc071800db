//! folder-hash: Deterministic Content Fingerprints
//!
//! Computes a name-aware hash for a file or a directory tree. Files hash
//! their name and bytes; directories hash their name and their children's
//! hashes sorted by name. Equal names and contents give equal hashes no
//! matter where the entry lives.

pub mod api;
pub mod concurrency;
pub mod config;
pub mod error;
pub mod logging;
pub mod tree;
pub mod types;

pub use api::{hash_element, hash_element_async, hash_path, FolderHasher};
pub use concurrency::CancellationToken;
pub use error::{ConfigError, HashError};
pub use tree::builder::{HashEngine, HashOptions};
pub use tree::fs::{FileSystem, LocalFileSystem};
pub use tree::node::HashResult;
pub use types::{Digest, EntryKind};
