//! Integration tests for the config module.
//!
//! Covers the loader (file I/O and JSON parsing) together with the accessor
//! surface the patcher consumes, including propagation of configuration
//! errors through `Bootstrap::from_config`.

use magepatch::config::{loader, ProjectConfig, DEFAULT_WITH_BOOTSTRAP_PATCH, MAGENTO_ROOT_DIR_KEY};
use magepatch::error::ConfigError;
use magepatch::patcher::Bootstrap;
use serde_json::Map;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_load_manifest_and_resolve_settings() {
    let tempdir = TempDir::new().unwrap();
    let manifest = tempdir.path().join("composer.json");
    fs::write(
        &manifest,
        r#"{
            "name": "shop/deployment",
            "extra": {
                "magento-root-dir": "htdocs",
                "with-bootstrap-patch": false
            }
        }"#,
    )
    .unwrap();

    let config = loader::load_extra_from_file(&manifest).unwrap();

    assert_eq!(config.magento_root_dir().unwrap(), PathBuf::from("htdocs"));
    assert!(!config.is_bootstrap_patch_enabled());
}

#[test]
fn test_flag_defaults_on_in_loaded_manifest() {
    let tempdir = TempDir::new().unwrap();
    let manifest = tempdir.path().join("composer.json");
    fs::write(&manifest, r#"{"extra": {"magento-root-dir": "htdocs"}}"#).unwrap();

    let config = loader::load_extra_from_file(&manifest).unwrap();

    assert!(DEFAULT_WITH_BOOTSTRAP_PATCH);
    assert!(config.is_bootstrap_patch_enabled());
}

#[test]
fn test_load_rejects_malformed_manifest() {
    let tempdir = TempDir::new().unwrap();
    let manifest = tempdir.path().join("composer.json");
    fs::write(&manifest, "{ this is not json }").unwrap();

    assert!(matches!(
        loader::load_extra_from_file(&manifest),
        Err(ConfigError::InvalidJson(_))
    ));
}

#[test]
fn test_load_missing_manifest_reports_file_not_found() {
    let tempdir = TempDir::new().unwrap();

    match loader::load_extra_from_file(&tempdir.path().join("composer.json")) {
        Err(ConfigError::FileNotFound(msg)) => assert!(msg.contains("composer.json")),
        other => panic!("Expected FileNotFound, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_factory_propagates_missing_root_dir() {
    let config = ProjectConfig::new(Map::new());

    match Bootstrap::from_config(&config) {
        Err(ConfigError::MissingKey(key)) => assert_eq!(key, MAGENTO_ROOT_DIR_KEY),
        other => panic!("Expected MissingKey, got {:?}", other.map(|_| ())),
    }
}
