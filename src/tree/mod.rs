//! Filesystem hash tree
//!
//! Every entry (file or directory) gets a deterministic hash based on its
//! name and content; a directory's content is its children's hashes.

pub mod builder;
pub mod fs;
pub mod hasher;
pub mod node;
pub mod path;
