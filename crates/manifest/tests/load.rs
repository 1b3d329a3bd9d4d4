//! Tests for reading manifests from disk.

use manifest::{DEFAULT_MANIFEST, ManifestError, load_manifest};
use test_support::TestDir;

#[test]
fn missing_manifest_is_none() {
    let dir = TestDir::new();
    let loaded = load_manifest(dir.path(), DEFAULT_MANIFEST).expect("load");
    assert!(loaded.is_none());
}

#[test]
fn existing_manifest_is_decoded() {
    let dir = TestDir::new();
    dir.write_file("package.json", r#"{ "main": "index.js" }"#);

    let manifest = load_manifest(dir.path(), DEFAULT_MANIFEST)
        .expect("load")
        .expect("manifest present");
    assert_eq!(manifest.main(), Some("index.js"));
}

#[test]
fn custom_manifest_name_is_honoured() {
    let dir = TestDir::new();
    dir.write_file("project.json", r#"{ "files": ["lib"] }"#);

    let manifest = load_manifest(dir.path(), "project.json")
        .expect("load")
        .expect("manifest present");
    assert_eq!(manifest.files().collect::<Vec<_>>(), vec!["lib"]);
}

#[test]
fn malformed_manifest_reports_path() {
    let dir = TestDir::new();
    let path = dir.write_file("package.json", "{ not json");

    let error = load_manifest(dir.path(), DEFAULT_MANIFEST).expect_err("decode failure");
    assert!(matches!(error, ManifestError::Decode { .. }));
    assert_eq!(error.path(), path);
    assert!(error.to_string().starts_with("failed to parse manifest"));
}

#[test]
fn unreadable_manifest_is_a_read_error() {
    let dir = TestDir::new();
    dir.create_dir("package.json");

    let error = load_manifest(dir.path(), DEFAULT_MANIFEST).expect_err("read failure");
    assert!(matches!(error, ManifestError::Read { .. }));
}
