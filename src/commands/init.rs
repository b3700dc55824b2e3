//! Init Command
//!
//! Creates a new config file activating the requested targets. Refuses to
//! overwrite an existing file.

use crate::commands::{dedupe, reject_unknown};
use crate::engine;
use crate::error::{Result, UglifyError};
use crate::registry::TargetRegistry;
use crate::ui as output;
use std::fs;
use std::path::PathBuf;

/// Options for the init command
#[derive(Debug)]
pub struct InitOptions {
    /// Targets to activate, in display order
    pub targets: Vec<String>,
    /// Config file to create
    pub config: PathBuf,
}

/// Run the init command
pub fn run(options: InitOptions) -> Result<()> {
    if options.targets.is_empty() {
        return Err(UglifyError::Other(
            "No targets given. Run `uglify list` to see available targets.".to_string(),
        ));
    }

    let registry = TargetRegistry::builtin();
    reject_unknown(&registry, &options.targets)?;

    let targets = dedupe(&options.targets);
    if targets.len() < options.targets.len() {
        output::warning("Duplicate targets in request were ignored");
    }

    if options.config.exists() {
        return Err(UglifyError::Other(format!(
            "Config file '{}' already exists. Use `uglify add` to extend it.",
            options.config.display()
        )));
    }

    let text = engine::render_config(&targets, &registry);
    fs::write(&options.config, text).map_err(|e| UglifyError::Io {
        path: options.config.clone(),
        source: e,
    })?;

    output::success(&format!(
        "Created {} with {} target(s)",
        options.config.display(),
        targets.len()
    ));
    for name in &targets {
        output::indent(name, 1);
    }

    Ok(())
}
