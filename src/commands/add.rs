//! Add Command
//!
//! Appends targets to the `with` array of an existing config file,
//! leaving everything outside that region untouched.

use crate::commands::{dedupe, reject_unknown};
use crate::engine;
use crate::error::{Result, UglifyError};
use crate::registry::TargetRegistry;
use crate::ui as output;
use std::fs;
use std::path::PathBuf;

/// Options for the add command
#[derive(Debug)]
pub struct AddOptions {
    /// Targets to add
    pub targets: Vec<String>,
    /// Config file to edit
    pub config: PathBuf,
}

/// Run the add command
pub fn run(options: AddOptions) -> Result<()> {
    if options.targets.is_empty() {
        return Err(UglifyError::Other(
            "No targets given. Run `uglify list` to see available targets.".to_string(),
        ));
    }

    let registry = TargetRegistry::builtin();
    reject_unknown(&registry, &options.targets)?;

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

    // Skip anything already active
    let mut new_targets = Vec::new();
    for name in dedupe(&options.targets) {
        if existing.contains(&name) {
            output::warning(&format!("Target '{}' is already active, skipping", name));
        } else {
            new_targets.push(name);
        }
    }

    if new_targets.is_empty() {
        return Err(UglifyError::Other(
            "All requested targets are already active; nothing to add.".to_string(),
        ));
    }

    let updated = engine::add_targets(&text, &new_targets, &registry).ok_or_else(|| {
        UglifyError::ParseError {
            file: options.config.display().to_string(),
            message: "no multi-line `with` array found".to_string(),
        }
    })?;

    fs::write(&options.config, updated).map_err(|e| UglifyError::Io {
        path: options.config.clone(),
        source: e,
    })?;

    output::success(&format!(
        "Added {} target(s) to {}",
        new_targets.len(),
        options.config.display()
    ));
    for name in &new_targets {
        output::indent(name, 1);
    }

    Ok(())
}
