//! Entry name validation and normalization

use crate::error::HashError;
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};
use unicode_normalization::UnicodeNormalization;

/// Validate an entry name passed to `hash_element`
///
/// A name must denote exactly one path component below the base path.
pub fn validate_name(name: &str) -> Result<(), HashError> {
    if name.is_empty() || name == "." || name == ".." {
        return Err(HashError::InvalidName(name.to_string()));
    }
    if name.contains('/') || name.contains(std::path::MAIN_SEPARATOR) {
        return Err(HashError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// Resolve `base_path/name`
pub fn resolve(base_path: &Path, name: &str) -> Result<PathBuf, HashError> {
    validate_name(name)?;
    Ok(base_path.join(name))
}

/// Split a full path into (parent, base name)
///
/// A path whose last component is not a normal name (`/`, `..`) has no base
/// name and is rejected, as is a name that is not valid UTF-8. A bare name
/// resolves against the current directory.
pub fn split_path(path: &Path) -> Result<(PathBuf, String), HashError> {
    let name = match path.components().next_back() {
        Some(Component::Normal(name)) => utf8_name(name, path)?.to_string(),
        _ => return Err(HashError::InvalidName(path.display().to_string())),
    };
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Ok((parent, name))
}

/// Borrow an entry name as UTF-8
///
/// Names enter digests as UTF-8 text. Non-UTF-8 names are rejected with
/// `InvalidName`, never converted lossily.
pub fn utf8_name<'a>(name: &'a OsStr, path: &Path) -> Result<&'a str, HashError> {
    name.to_str()
        .ok_or_else(|| HashError::InvalidName(path.display().to_string()))
}

/// Normalize a name for hashing
///
/// Unicode is normalized to NFC (Canonical Composition) when requested, so a
/// name stored decomposed on one filesystem and composed on another hashes
/// the same.
pub fn normalize_name(name: &str, normalize_unicode: bool) -> String {
    if normalize_unicode {
        name.nfc().collect()
    } else {
        name.to_string()
    }
}
