//! Core data types for magepatch.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Role of a patch target inside the Magento tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetRole {
    /// `app/Mage.php`, the core entry class file.
    MageEntry,
    /// `app/code/core/Mage/Core/functions.php`, the global helpers file.
    CoreFunctions,
}

impl fmt::Display for TargetRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetRole::MageEntry => write!(f, "Mage entry"),
            TargetRole::CoreFunctions => write!(f, "core functions"),
        }
    }
}

/// A single file eligible for the bootstrap patch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatchTarget {
    pub role: TargetRole,   // Role
    pub path: PathBuf,      // Absolute file path
}

/// Why a `patch()` call performed no work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// The `with-bootstrap-patch` flag is off.
    PatchingDisabled,
    /// Every target already carries the bootstrap marker.
    AlreadyPatched,
}

/// Result of a `patch()` invocation.
///
/// Hard failures (missing target while patching is mandated) are not
/// outcomes; they surface as `PatchError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatchOutcome {
    /// At least one target file was rewritten.
    Applied,
    /// Nothing to do.
    Skipped(SkipReason),
}

impl PatchOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, PatchOutcome::Applied)
    }
}
