//! Command dispatcher
//!
//! Routes CLI commands to their appropriate handlers.

use crate::cli::args::{Cli, Command};
use crate::commands;
use crate::constants;
use crate::error::Result;
use crate::ui as output;
use std::path::PathBuf;

/// Dispatch the parsed CLI command to the appropriate handler
pub fn dispatch(args: &Cli) -> Result<()> {
    match &args.command {
        Some(Command::Init { targets }) => commands::init::run(commands::init::InitOptions {
            targets: targets.clone(),
            config: config_path(args),
        }),

        Some(Command::Add { targets }) => commands::add::run(commands::add::AddOptions {
            targets: targets.clone(),
            config: config_path(args),
        }),

        Some(Command::Remove { targets }) => {
            commands::remove::run(commands::remove::RemoveOptions {
                targets: targets.clone(),
                config: config_path(args),
                format: args.global.format.clone(),
            })
        }

        Some(Command::List {
            environments,
            rulesets,
        }) => commands::list::run(commands::list::ListOptions {
            environments: *environments,
            rulesets: *rulesets,
        }),

        Some(Command::Completions { shell }) => commands::completions::run(*shell),

        None => {
            output::info("No command provided.");
            output::info("Quick start:");
            output::indent("uglify init js lints-js node", 2);
            output::indent("uglify add react", 2);
            output::indent("uglify remove node", 2);
            output::info("Use `uglify --help` for the full command list.");
            Ok(())
        }
    }
}

fn config_path(args: &Cli) -> PathBuf {
    args.global
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(constants::CONFIG_FILE))
}
