//! Magento deployment bootstrap patcher.
//!
//! This crate implements the bootstrap patch engine of a Magento deployment
//! tool: it rewrites the two core entry files (`app/Mage.php` and
//! `app/code/core/Mage/Core/functions.php`) to inject an early bootstrap
//! hook, gated by a configuration flag, idempotently.
//!
//! The system is organized into functional modules:
//! - **error**: Unified error type hierarchy
//! - **models**: Core data structures and types
//! - **config**: Deployment configuration access and loading
//! - **patcher**: Target location, patch predicate, and patch application
//!
//! The deployment tool supplies a populated [`config::ProjectConfig`] and
//! drives the two-operation surface:
//!
//! ```no_run
//! use magepatch::config::ProjectConfig;
//! use magepatch::patcher::Bootstrap;
//! use serde_json::{json, Map};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut extra = Map::new();
//! extra.insert("magento-root-dir".to_string(), json!("/srv/shop"));
//! let config = ProjectConfig::new(extra);
//!
//! let patcher = Bootstrap::from_config(&config)?;
//! if patcher.can_apply_patch() {
//!     patcher.patch()?;
//! }
//! # Ok(())
//! # }
//! ```

// Core foundational modules
pub mod error;
pub mod models;

// Deployment configuration access
pub mod config;

// Bootstrap patch engine
pub mod patcher;

// Re-export the log crate for macro usage
pub use log;

// Re-export error types for easy access
pub use error::{ConfigError, PatchError};

// Re-export model types for easy access
pub use models::{PatchOutcome, PatchTarget, SkipReason, TargetRole};

// Re-export the configuration and patcher surface
pub use config::ProjectConfig;
pub use patcher::{Bootstrap, PatchResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
