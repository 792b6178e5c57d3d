//! Config file loader for the deployment tool's JSON configuration.

use crate::config::ProjectConfig;
use crate::error::ConfigError;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Load the `extra` configuration object from a JSON file.
pub fn load_extra_from_file(path: &Path) -> Result<ProjectConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::FileNotFound(format!(
                "Configuration file not found at: {}",
                path.display()
            ))
        } else {
            ConfigError::IoError(e)
        }
    })?;

    parse_extra(&content)
}

/// Parse the `extra` configuration object from a JSON document.
///
/// Accepts either a manifest with a top-level `extra` object (the package
/// manifest shape) or a bare object holding the patcher keys directly.
pub fn parse_extra(content: &str) -> Result<ProjectConfig, ConfigError> {
    let document: Value = serde_json::from_str(content)?;

    let object = match document {
        Value::Object(map) => map,
        _ => {
            return Err(ConfigError::ValidationFailed(
                "Configuration document must be a JSON object".to_string(),
            ))
        }
    };

    let extra = match object.get("extra") {
        Some(Value::Object(extra)) => extra.clone(),
        _ => object,
    };

    Ok(ProjectConfig::new(extra))
}
