//! Project configuration for the bootstrap patcher.
//!
//! The deployment tool owns a JSON configuration document (the `extra`
//! section of its package manifest). `ProjectConfig` wraps that object
//! read-only and resolves the two settings the patcher consumes:
//!
//! - `with-bootstrap-patch`: feature flag, defaults on when absent
//! - `magento-root-dir`: installation root, required
//!
//! # Module Structure
//!
//! - `loader`: Reads the `extra` object from a JSON file or document

pub mod loader;

use crate::error::ConfigError;
use serde_json::{Map, Value};
use std::path::PathBuf;

/// `extra` key gating the bootstrap patch feature.
pub const WITH_BOOTSTRAP_PATCH_KEY: &str = "with-bootstrap-patch";

/// `extra` key naming the Magento installation root.
pub const MAGENTO_ROOT_DIR_KEY: &str = "magento-root-dir";

/// Flag value assumed when `with-bootstrap-patch` is absent.
pub const DEFAULT_WITH_BOOTSTRAP_PATCH: bool = true;

/// Immutable view over the deployment tool's configuration map.
#[derive(Clone, Debug, Default)]
pub struct ProjectConfig {
    extra: Map<String, Value>,
}

impl ProjectConfig {
    pub fn new(extra: Map<String, Value>) -> Self {
        ProjectConfig { extra }
    }

    /// Whether the bootstrap patch feature is on.
    ///
    /// An absent key means enabled. A non-boolean value is tolerated and
    /// falls back to the default so a malformed manifest cannot silently
    /// turn the feature off.
    pub fn is_bootstrap_patch_enabled(&self) -> bool {
        match self.extra.get(WITH_BOOTSTRAP_PATCH_KEY) {
            None => DEFAULT_WITH_BOOTSTRAP_PATCH,
            Some(Value::Bool(flag)) => *flag,
            Some(other) => {
                log::warn!(
                    "[Config] Non-boolean value for {}: {} (using default)",
                    WITH_BOOTSTRAP_PATCH_KEY,
                    other
                );
                DEFAULT_WITH_BOOTSTRAP_PATCH
            }
        }
    }

    /// The Magento installation root directory. Required.
    pub fn magento_root_dir(&self) -> Result<PathBuf, ConfigError> {
        match self.extra.get(MAGENTO_ROOT_DIR_KEY) {
            Some(Value::String(dir)) if !dir.is_empty() => Ok(PathBuf::from(dir)),
            Some(other) if !other.is_string() => Err(ConfigError::ValidationFailed(format!(
                "{} must be a non-empty string, got: {}",
                MAGENTO_ROOT_DIR_KEY, other
            ))),
            _ => Err(ConfigError::MissingKey(MAGENTO_ROOT_DIR_KEY)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn extra(entries: &[(&str, Value)]) -> Map<String, Value> {
        entries
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn test_flag_defaults_on_when_absent() {
        let config = ProjectConfig::new(Map::new());
        assert!(config.is_bootstrap_patch_enabled());
    }

    #[test]
    fn test_flag_explicit_values() {
        let on = ProjectConfig::new(extra(&[(WITH_BOOTSTRAP_PATCH_KEY, json!(true))]));
        assert!(on.is_bootstrap_patch_enabled());

        let off = ProjectConfig::new(extra(&[(WITH_BOOTSTRAP_PATCH_KEY, json!(false))]));
        assert!(!off.is_bootstrap_patch_enabled());
    }

    #[test]
    fn test_flag_non_boolean_falls_back_to_default() {
        let config = ProjectConfig::new(extra(&[(WITH_BOOTSTRAP_PATCH_KEY, json!("yes"))]));
        assert_eq!(
            config.is_bootstrap_patch_enabled(),
            DEFAULT_WITH_BOOTSTRAP_PATCH
        );
    }

    #[test]
    fn test_root_dir_required() {
        let config = ProjectConfig::new(Map::new());
        match config.magento_root_dir() {
            Err(ConfigError::MissingKey(key)) => assert_eq!(key, MAGENTO_ROOT_DIR_KEY),
            other => panic!("Expected MissingKey, got {:?}", other),
        }
    }

    #[test]
    fn test_root_dir_empty_string_is_missing() {
        let config = ProjectConfig::new(extra(&[(MAGENTO_ROOT_DIR_KEY, json!(""))]));
        assert!(matches!(
            config.magento_root_dir(),
            Err(ConfigError::MissingKey(_))
        ));
    }

    #[test]
    fn test_root_dir_non_string_is_invalid() {
        let config = ProjectConfig::new(extra(&[(MAGENTO_ROOT_DIR_KEY, json!(42))]));
        assert!(matches!(
            config.magento_root_dir(),
            Err(ConfigError::ValidationFailed(_))
        ));
    }

    #[test]
    fn test_root_dir_resolves() {
        let config = ProjectConfig::new(extra(&[(MAGENTO_ROOT_DIR_KEY, json!("/srv/shop"))]));
        assert_eq!(config.magento_root_dir().unwrap(), PathBuf::from("/srv/shop"));
    }
}
