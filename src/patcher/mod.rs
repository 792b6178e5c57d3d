//! Bootstrap patch application against a Magento install.
//!
//! `Bootstrap` decides whether the patch is applicable (`can_apply_patch`),
//! applies the text transformation to the on-disk targets exactly once
//! (`patch`), and reports Applied/Skipped outcomes deterministically.
//! Expected "nothing to do" situations are outcomes, never errors; the only
//! hard failure is a missing target while patching is mandated.

pub mod injection;

use crate::config::ProjectConfig;
use crate::error::{ConfigError, PatchError};
use crate::models::{PatchOutcome, PatchTarget, SkipReason, TargetRole};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Result type for patching operations
pub type PatchResult<T> = std::result::Result<T, PatchError>;

/// Compute the two fixed patch targets under a Magento root.
///
/// Pure path concatenation, no I/O. Entry file first, functions file second.
pub fn targets(root: &Path) -> [PatchTarget; 2] {
    [
        PatchTarget {
            role: TargetRole::MageEntry,
            path: root.join("app/Mage.php"),
        },
        PatchTarget {
            role: TargetRole::CoreFunctions,
            path: root.join("app/code/core/Mage/Core/functions.php"),
        },
    ]
}

/// Bootstrap patcher over the two fixed core files.
///
/// Targets are computed once at construction and immutable thereafter. The
/// files themselves are the only persisted state: a file is "patched" iff
/// its content carries the bootstrap marker.
pub struct Bootstrap {
    enabled: bool,
    targets: [PatchTarget; 2],
}

impl Bootstrap {
    /// Build a ready-to-use patcher from the deployment configuration.
    ///
    /// Pure construction; fails only when the Magento root directory is
    /// missing from the configuration.
    pub fn from_config(config: &ProjectConfig) -> Result<Self, ConfigError> {
        let root = config.magento_root_dir()?;
        Ok(Bootstrap {
            enabled: config.is_bootstrap_patch_enabled(),
            targets: targets(&root),
        })
    }

    /// Whether a patch application is currently valid.
    ///
    /// Pure query: `false` when the feature is off, otherwise `true` iff at
    /// least one target file exists without the marker. Missing or unreadable
    /// files never raise here.
    pub fn can_apply_patch(&self) -> bool {
        if !self.enabled {
            return false;
        }

        self.targets
            .iter()
            .any(|target| match fs::read_to_string(&target.path) {
                Ok(content) => !injection::is_already_patched(&content),
                Err(_) => false,
            })
    }

    /// Apply the bootstrap patch to every unpatched target.
    ///
    /// A disabled feature short-circuits to `Skipped` before any file
    /// access. With the feature enabled every target must exist; a missing
    /// one aborts before the first byte is written, so a failed run never
    /// leaves the install half-patched.
    pub fn patch(&self) -> PatchResult<PatchOutcome> {
        if !self.enabled {
            log::debug!("[Patcher] Bootstrap patch disabled, skipping");
            return Ok(PatchOutcome::Skipped(SkipReason::PatchingDisabled));
        }

        for target in &self.targets {
            if !target.path.exists() {
                return Err(PatchError::MissingTarget(target.path.clone()));
            }
        }

        let mut applied = 0u32;
        for target in &self.targets {
            if self.patch_file(target)? {
                applied += 1;
            }
        }

        if applied == 0 {
            log::debug!("[Patcher] All targets already carry the bootstrap hook");
            return Ok(PatchOutcome::Skipped(SkipReason::AlreadyPatched));
        }

        log::info!("[Patcher] Bootstrap hook injected into {} file(s)", applied);
        Ok(PatchOutcome::Applied)
    }

    /// Patch one target; returns `true` when the file was rewritten.
    fn patch_file(&self, target: &PatchTarget) -> PatchResult<bool> {
        let content = fs::read_to_string(&target.path).map_err(|e| {
            PatchError::PatchFailed(format!("Failed to read {}: {}", target.path.display(), e))
        })?;

        if injection::is_already_patched(&content) {
            log::debug!(
                "[Patcher] {} already patched ({})",
                target.path.display(),
                target.role
            );
            return Ok(false);
        }

        let patched = injection::inject_bootstrap_hook(&content);
        replace_file(&target.path, &patched)?;

        log::info!("[Patcher] Patched {} ({})", target.path.display(), target.role);
        Ok(true)
    }
}

/// Atomically replace `path` with `content`.
///
/// Stages the rewrite in a temp file inside the target's directory and
/// renames it over the original, so readers never observe a partial file.
fn replace_file(path: &Path, content: &str) -> PatchResult<()> {
    let dir = path.parent().ok_or_else(|| {
        PatchError::PatchFailed(format!("No parent directory for {}", path.display()))
    })?;

    let mut staged = NamedTempFile::new_in(dir).map_err(|e| {
        PatchError::PatchFailed(format!("Failed to stage rewrite of {}: {}", path.display(), e))
    })?;
    staged.write_all(content.as_bytes()).map_err(|e| {
        PatchError::PatchFailed(format!("Failed to stage rewrite of {}: {}", path.display(), e))
    })?;
    staged.persist(path).map_err(|e| {
        PatchError::PatchFailed(format!("Failed to replace {}: {}", path.display(), e))
    })?;

    Ok(())
}
