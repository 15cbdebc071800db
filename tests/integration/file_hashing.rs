//! File hashing: determinism, location independence, content and name sensitivity

use super::test_utils::{SampleFolder, FILE1_CONTENT};
use folder_hash::hash_element;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_file_hash_is_present() {
    let sample = SampleFolder::create();
    let result = hash_element("file1", sample.root()).unwrap();

    assert_eq!(result.name, "file1");
    assert!(!result.hash.is_empty());
    assert!(result.children.is_none());
}

/// Same file hashed twice without modification
#[test]
fn test_unchanged_file_same_hash() {
    let sample = SampleFolder::create();
    let hash1 = hash_element("file1", sample.root()).unwrap();
    let hash2 = hash_element("file1", sample.root()).unwrap();
    assert_eq!(hash1.hash, hash2.hash);
}

/// Same name and content, different folder
#[test]
fn test_same_file_in_different_folder_same_hash() {
    let sample = SampleFolder::create();
    let hash1 = hash_element("file1", sample.root()).unwrap();
    let hash2 = hash_element("file1", sample.path("subfolder1")).unwrap();
    assert_eq!(hash1.hash, hash2.hash);
}

/// Same name, different content
#[test]
fn test_same_name_different_content_different_hash() {
    let sample = SampleFolder::create();
    let hash1 = hash_element("file1", sample.root()).unwrap();
    let hash2 = hash_element("file1", sample.path("f2")).unwrap();
    assert_ne!(hash1.hash, hash2.hash);
}

#[test]
fn test_sibling_files_different_hash() {
    let sample = SampleFolder::create();
    let hash1 = hash_element("file1", sample.root()).unwrap();
    let hash2 = hash_element("file2", sample.root()).unwrap();
    assert_ne!(hash1.hash, hash2.hash);
}

/// Same content, different name
#[test]
fn test_same_content_different_name_different_hash() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("file1"), FILE1_CONTENT).unwrap();
    fs::write(temp_dir.path().join("renamed"), FILE1_CONTENT).unwrap();

    let hash1 = hash_element("file1", temp_dir.path()).unwrap();
    let hash2 = hash_element("renamed", temp_dir.path()).unwrap();
    assert_ne!(hash1.hash, hash2.hash);
}

#[test]
fn test_file_hash_changes_after_modification() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("file1");
    fs::write(&file, "before").unwrap();
    let before = hash_element("file1", temp_dir.path()).unwrap();

    fs::write(&file, "after").unwrap();
    let after = hash_element("file1", temp_dir.path()).unwrap();

    assert_ne!(before.hash, after.hash);
}

#[test]
fn test_empty_file_hashes() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("empty"), "").unwrap();

    let result = hash_element("empty", temp_dir.path()).unwrap();
    assert_eq!(result.hash.len(), 64);
}
