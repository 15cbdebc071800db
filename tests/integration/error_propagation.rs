//! Errors abort the whole computation

use folder_hash::{hash_element, hash_path, CancellationToken, FolderHasher, HashError};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_file_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let err = hash_element("does-not-exist", temp_dir.path()).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_missing_base_path_not_found() {
    let temp_dir = TempDir::new().unwrap();
    let err = hash_element("file1", temp_dir.path().join("nowhere")).unwrap_err();
    assert!(matches!(err, HashError::NotFound(_)));
}

#[test]
fn test_hash_path_without_name_rejected() {
    let err = hash_path("/").unwrap_err();
    assert!(matches!(err, HashError::InvalidName(_)));
}

#[test]
fn test_cancelled_token_aborts() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("dir");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("file1"), "content").unwrap();

    let token = CancellationToken::new();
    let hasher = FolderHasher::default().with_cancellation(token.clone());
    assert!(hasher.hash_element("dir", temp_dir.path()).is_ok());

    token.cancel();
    let err = hasher.hash_element("dir", temp_dir.path()).unwrap_err();
    assert!(matches!(err, HashError::Cancelled));
}

#[cfg(unix)]
#[test]
fn test_unreadable_child_aborts_directory() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("dir");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("ok"), "fine").unwrap();
    let locked = dir.join("locked");
    fs::write(&locked, "secret").unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Privileged users can read regardless of mode bits
    if fs::read(&locked).is_ok() {
        return;
    }

    let err = hash_element("dir", temp_dir.path()).unwrap_err();
    assert!(err.is_unreadable());

    fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).unwrap();
}

#[cfg(unix)]
#[test]
fn test_broken_symlink_child_aborts_directory() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("dir");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("ok"), "fine").unwrap();
    std::os::unix::fs::symlink(dir.join("gone"), dir.join("dangling")).unwrap();

    let err = hash_element("dir", temp_dir.path()).unwrap_err();
    assert!(err.is_not_found());
}
