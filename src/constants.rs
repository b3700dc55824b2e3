//! Project-wide constants shared between the engine, registry and commands.

/// Name of the installed binary.
pub const BIN_NAME: &str = "uglify";

/// Default config file name, relative to the working directory.
pub const CONFIG_FILE: &str = "eslint.config.js";

/// npm package the generated file imports the factory from.
pub const NPM_PACKAGE: &str = "eslint-config-uglify";

/// Name of the factory function in the generated file.
pub const FACTORY_NAME: &str = "uglify";

/// Prefix reserved for lint-ruleset targets.
pub const LINT_RULESET_PREFIX: &str = "lints-";

/// Reserved name of the base language-options target.
pub const BASE_OPTIONS_NAME: &str = "js";

/// Suffix reserved for override-companion targets.
pub const OVERRIDE_SUFFIX: &str = "-overrides";
