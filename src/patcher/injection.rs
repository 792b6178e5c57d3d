//! Bootstrap hook text transforms.
//!
//! Marker detection and hook insertion are pure string functions so the
//! applicator can be exercised without touching the filesystem. The marker
//! embedded in the injected block doubles as the persisted "already patched"
//! state: a file carries the patch iff its content contains the marker.

use once_cell::sync::Lazy;
use regex::Regex;

// Pre-compiled regex for the injection point (first opening PHP tag)
static OPEN_TAG_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<\?php").expect("Invalid PHP open tag regex")
});

/// Marker identifying an already patched file.
pub const BOOTSTRAP_MARKER: &str = "[magepatch] composer bootstrap hook";

/// Render the hook block inserted at the injection point.
///
/// The `defined()` guard keeps the hook inert on entry points that never
/// define `MAGENTO_ROOT`, so patched files stay loadable everywhere.
fn hook_block() -> String {
    format!(
        "\n// {marker}\nif (defined('MAGENTO_ROOT') && file_exists(MAGENTO_ROOT . '/app/bootstrap.php')) {{\n    require_once MAGENTO_ROOT . '/app/bootstrap.php';\n}}\n",
        marker = BOOTSTRAP_MARKER
    )
}

/// True when `content` already carries the bootstrap marker.
///
/// Content inspection only; file identity plays no part in the check.
pub fn is_already_patched(content: &str) -> bool {
    content.contains(BOOTSTRAP_MARKER)
}

/// Insert the bootstrap hook at the deterministic injection point.
///
/// The hook lands immediately after the first opening `<?php` tag. Content
/// with no opening tag gets a fresh tag plus the hook prepended, so the
/// transform always changes the content.
pub fn inject_bootstrap_hook(content: &str) -> String {
    let block = hook_block();

    match OPEN_TAG_REGEX.find(content) {
        Some(tag) => {
            let mut patched = String::with_capacity(content.len() + block.len());
            patched.push_str(&content[..tag.end()]);
            patched.push_str(&block);
            patched.push_str(&content[tag.end()..]);
            patched
        }
        None => format!("<?php{}{}", block, content),
    }
}
