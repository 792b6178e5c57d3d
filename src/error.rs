//! Unified error type hierarchy for magepatch
//!
//! Provides structured error handling with ConfigError and PatchError.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Configuration reading and validation errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Required configuration key missing: {0}")]
    MissingKey(&'static str),

    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid JSON in config: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),

    #[error("IO error during config operations: {0}")]
    IoError(#[from] io::Error),
}

/// Bootstrap patching operation errors.
///
/// `MissingTarget` is a precondition violation: patching was mandated but the
/// install at the configured root is incomplete. Callers must abort the
/// deployment rather than retry.
#[derive(Error, Debug)]
pub enum PatchError {
    #[error("Bootstrap patch is enabled but target file is missing: {}", .0.display())]
    MissingTarget(PathBuf),

    #[error("Patch application failed: {0}")]
    PatchFailed(String),
}
