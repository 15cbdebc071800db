//! Digest computation for files and directories using BLAKE3
//!
//! The combination rule is part of the crate's output format: changing the
//! byte layout below changes every digest callers may have recorded.

use crate::types::{Digest, EntryKind};
use blake3::Hasher;

/// Feed the kind tag and the length-prefixed name into the hasher
fn update_header(hasher: &mut Hasher, kind: EntryKind, name: &str) {
    let name_bytes = name.as_bytes();

    // Hash type discriminator
    hasher.update(kind.tag());

    // Hash name length (8 bytes, big-endian for determinism)
    hasher.update(&(name_bytes.len() as u64).to_be_bytes());

    hasher.update(name_bytes);
}

/// Compute the digest of a file entry
///
/// Digest = hash("file" || name_len || name || content)
///
/// Name comes first, then content, so two files with the same bytes but
/// different names never share a digest.
pub fn compute_file_digest(name: &str, content: &[u8]) -> Digest {
    let mut hasher = Hasher::new();
    update_header(&mut hasher, EntryKind::File, name);
    hasher.update(content);
    *hasher.finalize().as_bytes()
}

/// Compute the digest of a directory entry
///
/// Digest = hash("directory" || name_len || name || children_count || children)
///
/// `children` must already be sorted by name. Only the immediate name enters
/// the digest, never the parent path.
pub fn compute_directory_digest(name: &str, children: &[Digest]) -> Digest {
    let mut hasher = Hasher::new();
    update_header(&mut hasher, EntryKind::Directory, name);

    // Hash children count (8 bytes, big-endian)
    hasher.update(&(children.len() as u64).to_be_bytes());

    for child in children {
        hasher.update(child);
    }

    *hasher.finalize().as_bytes()
}

/// Hex-encode a digest the way it appears in a `HashResult`
pub fn to_hex(digest: &Digest) -> String {
    hex::encode(digest)
}
