//! List Command
//!
//! Prints the registry of known targets, split into environments and
//! lint rulesets.

use crate::constants::BASE_OPTIONS_NAME;
use crate::error::Result;
use crate::registry::{TargetRegistry, is_environment};
use crate::ui as output;
use colored::Colorize;

/// Options for the list command
#[derive(Debug)]
pub struct ListOptions {
    /// Only environment presets
    pub environments: bool,
    /// Only lint rulesets
    pub rulesets: bool,
}

/// Run the list command
pub fn run(options: ListOptions) -> Result<()> {
    let registry = TargetRegistry::builtin();

    output::header("Available targets");

    for entry in registry.entries() {
        let env = is_environment(entry.name);
        if options.environments && !env {
            continue;
        }
        if options.rulesets && env {
            continue;
        }

        let kind = if env {
            "environment".blue()
        } else if entry.name == BASE_OPTIONS_NAME {
            "base options".cyan()
        } else {
            "lint ruleset".green()
        };

        println!(
            "  {:<16} {:<14} {}",
            entry.name.bold(),
            kind,
            entry.description
        );

        if output::is_verbose() {
            let files = format!("default files: {}", entry.default_files);
            output::indent(&files.dimmed().to_string(), 2);
        }
    }

    Ok(())
}
