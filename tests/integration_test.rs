//! Integration tests for mungectl.
//!
//! These tests verify the complete key workflows of the library.

use mungectl::config::KeyConfig;
use mungectl::crypto::encoding::{decode_key, encode_key};
use mungectl::crypto::key::{generate_key, KEY_LENGTH};
use mungectl::error::{MungeError, Result};
use mungectl::input::{scan_text, InputSource};
use mungectl::storage::keyfile::{read_key, write_key};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_generate_store_export_workflow() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("munge.key");

    // 1. Generate and store
    let key = generate_key()?;
    write_key(&path, &key)?;

    // 2. Read back and export
    let exported = encode_key(&read_key(&path)?);

    // 3. The exported text decodes to the generated key
    let decoded = decode_key(&exported)?;
    assert_eq!(decoded.len(), KEY_LENGTH);
    assert_eq!(decoded, key);

    Ok(())
}

#[test]
fn test_transfer_between_nodes_workflow() -> Result<()> {
    let node_a = TempDir::new().unwrap();
    let node_b = TempDir::new().unwrap();

    for node in [&node_a, &node_b] {
        fs::create_dir_all(node.path().join("etc").join("munge")).unwrap();
    }

    let key_a = KeyConfig::from_snap_common(node_a.path()).key_file();
    let key_b = KeyConfig::from_snap_common(node_b.path()).key_file();

    // Node A generates, node B holds a different key
    key_a.write(&generate_key()?)?;
    key_b.write(&generate_key()?)?;
    assert_ne!(key_a.read()?, key_b.read()?);

    // Export from A as it would be printed to stdout
    let printed = format!("{}\n", encode_key(&key_a.read()?));

    // Import into B as it would arrive on stdin
    let scanned = scan_text(InputSource::piped(printed.as_bytes()))?;
    key_b.write(&decode_key(&scanned)?)?;

    assert_eq!(key_a.read()?, key_b.read()?);
    assert_eq!(
        fs::read(key_a.path()).unwrap(),
        fs::read(key_b.path()).unwrap()
    );

    Ok(())
}

#[test]
fn test_import_rejects_malformed_text_without_touching_key() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let key_file = KeyConfig::with_key_path(temp_dir.path().join("munge.key")).key_file();

    let original = generate_key()?;
    key_file.write(&original)?;

    let scanned = scan_text(InputSource::piped("not-valid-base64!!\n".as_bytes()))?;
    match decode_key(&scanned) {
        Err(MungeError::FormatError(_)) => {}
        _ => panic!("Expected FormatError"),
    }

    assert_eq!(key_file.read()?, original);

    Ok(())
}

#[test]
fn test_externally_sourced_key_of_any_length() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("munge.key");

    let key = decode_key("d2UgYmUgdGVzdGluZw==")?;
    write_key(&path, &key)?;

    let read = read_key(&path)?;
    assert_eq!(read.as_bytes(), b"we be testing");
    assert_eq!(encode_key(&read), "d2UgYmUgdGVzdGluZw==");

    Ok(())
}

#[test]
fn test_export_missing_key_file() {
    let temp_dir = TempDir::new().unwrap();
    let key_file = KeyConfig::from_snap_common(temp_dir.path()).key_file();

    match key_file.read() {
        Err(MungeError::NotFoundError(path)) => assert_eq!(path, key_file.path()),
        _ => panic!("Expected NotFoundError"),
    }
}
