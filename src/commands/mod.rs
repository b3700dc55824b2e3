pub mod add;
pub mod completions;
pub mod init;
pub mod list;
pub mod remove;

use crate::error::{Result, UglifyError};
use crate::registry::TargetRegistry;

/// Reject any requested name the registry does not know, reporting all
/// offending names together before anything is mutated.
pub(crate) fn reject_unknown(registry: &TargetRegistry, requested: &[String]) -> Result<()> {
    let unknown = registry.unknown_of(requested);
    if unknown.is_empty() {
        return Ok(());
    }

    Err(UglifyError::Other(format!(
        "Unknown target(s): {}. Run `uglify list` to see available targets.",
        unknown.join(", ")
    )))
}

/// Drop duplicate names while preserving first-seen order.
pub(crate) fn dedupe(requested: &[String]) -> Vec<String> {
    let mut seen = Vec::new();
    for name in requested {
        if !seen.contains(name) {
            seen.push(name.clone());
        }
    }
    seen
}
