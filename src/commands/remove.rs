//! Remove Command
//!
//! Removes targets from the `with` array and excises their override
//! blocks. At least one target must remain active afterwards.

use crate::commands::dedupe;
use crate::engine::{self, RemoveOutcome};
use crate::error::{Result, UglifyError};
use crate::registry::TargetRegistry;
use crate::ui as output;
use crate::utils::machine_output;
use std::fs;
use std::path::PathBuf;

/// Options for the remove command
#[derive(Debug)]
pub struct RemoveOptions {
    /// Targets to remove
    pub targets: Vec<String>,
    /// Config file to edit
    pub config: PathBuf,
    /// Machine-readable output format ("json")
    pub format: Option<String>,
}

/// Run the remove command
pub fn run(options: RemoveOptions) -> Result<()> {
    if options.targets.is_empty() {
        return Err(UglifyError::Other("No targets given.".to_string()));
    }

    if !options.config.exists() {
        return Err(UglifyError::ConfigNotFound {
            path: options.config.clone(),
        });
    }

    let text = fs::read_to_string(&options.config).map_err(|e| UglifyError::Io {
        path: options.config.clone(),
        source: e,
    })?;

    let existing = engine::parse_targets(&text);
    if existing.is_empty() {
        return Err(UglifyError::ParseError {
            file: options.config.display().to_string(),
            message: "no multi-line `with` array found".to_string(),
        });
    }

    // Names absent from the active set are reported, not fatal; the
    // removal request is validated against the file, not the registry.
    let mut removed = Vec::new();
    let mut warnings = Vec::new();
    for name in dedupe(&options.targets) {
        if existing.contains(&name) {
            removed.push(name);
        } else {
            let msg = format!("Target '{}' is not active, skipping", name);
            output::warning(&msg);
            warnings.push(msg);
        }
    }

    if removed.is_empty() {
        return Err(UglifyError::Other(
            "None of the requested targets are active; nothing to remove.".to_string(),
        ));
    }

    let remaining: Vec<String> = existing
        .iter()
        .filter(|name| !removed.contains(*name))
        .cloned()
        .collect();

    if remaining.is_empty() {
        return Err(UglifyError::Other(
            "Refusing to remove every active target; at least one must remain.".to_string(),
        ));
    }

    let registry = TargetRegistry::builtin();
    let (updated, removed_overrides) =
        engine::remove_targets(&text, &remaining, &removed, &registry).ok_or_else(|| {
            UglifyError::ParseError {
                file: options.config.display().to_string(),
                message: "no multi-line `with` array found".to_string(),
            }
        })?;

    fs::write(&options.config, updated).map_err(|e| UglifyError::Io {
        path: options.config.clone(),
        source: e,
    })?;

    let outcome = RemoveOutcome {
        success: true,
        removed_targets: removed,
        removed_overrides,
    };

    if options.format.as_deref() == Some("json") {
        return machine_output::emit_json("remove", &outcome, warnings);
    }

    output::success(&format!(
        "Removed {} target(s) from {}",
        outcome.removed_targets.len(),
        options.config.display()
    ));
    for name in &outcome.removed_targets {
        output::indent(name, 1);
    }
    if !outcome.removed_overrides.is_empty() {
        output::info(&format!(
            "Dropped override block(s): {}",
            outcome.removed_overrides.join(", ")
        ));
    }

    Ok(())
}
