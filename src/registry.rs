//! Target registry
//!
//! Static catalogue of the targets that can be enabled in a generated
//! config: the base language options, lint rulesets and environment
//! presets. The engine never reads this table directly; it receives it
//! through the [`TargetLookup`] trait so it stays testable in isolation.

use crate::constants::{BASE_OPTIONS_NAME, LINT_RULESET_PREFIX, OVERRIDE_SUFFIX};

/// One registry record: a target name, a human description and the
/// literal source text of its default file-glob array. The literal is
/// opaque; it is spliced into generated comments, never parsed.
#[derive(Debug, Clone, Copy)]
pub struct TargetEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub default_files: &'static str,
}

/// Lookup interface the engine depends on.
pub trait TargetLookup {
    fn entry(&self, name: &str) -> Option<&TargetEntry>;
}

/// Built-in catalogue of known targets, in display order.
pub struct TargetRegistry {
    entries: Vec<TargetEntry>,
}

impl TargetRegistry {
    pub fn builtin() -> Self {
        let entries = vec![
            TargetEntry {
                name: "js",
                description: "Base JavaScript language options",
                default_files: r#"["**/*.js", "**/*.mjs", "**/*.cjs"]"#,
            },
            TargetEntry {
                name: "lints-js",
                description: "Core JavaScript lint ruleset",
                default_files: r#"["**/*.js", "**/*.mjs", "**/*.cjs"]"#,
            },
            TargetEntry {
                name: "lints-ts",
                description: "TypeScript lint ruleset",
                default_files: r#"["**/*.ts", "**/*.tsx"]"#,
            },
            TargetEntry {
                name: "lints-imports",
                description: "Import ordering and resolution rules",
                default_files: "[]",
            },
            TargetEntry {
                name: "lints-style",
                description: "Stylistic formatting rules",
                default_files: "[]",
            },
            TargetEntry {
                name: "node",
                description: "Node.js globals and environment presets",
                default_files: "[]",
            },
            TargetEntry {
                name: "browser",
                description: "Browser globals and DOM environment",
                default_files: "[]",
            },
            TargetEntry {
                name: "react",
                description: "React plugin rules and JSX environment",
                default_files: r#"["**/*.jsx", "**/*.tsx"]"#,
            },
            TargetEntry {
                name: "vitest",
                description: "Vitest test-file environment",
                default_files: r#"["**/*.{test,spec}.?(c|m)[jt]s?(x)"]"#,
            },
        ];

        Self { entries }
    }

    pub fn entries(&self) -> &[TargetEntry] {
        &self.entries
    }

    /// Names from `requested` that the catalogue does not know about,
    /// in request order.
    pub fn unknown_of<'a>(&self, requested: &'a [String]) -> Vec<&'a str> {
        requested
            .iter()
            .filter(|name| self.entry(name).is_none())
            .map(|name| name.as_str())
            .collect()
    }
}

impl TargetLookup for TargetRegistry {
    fn entry(&self, name: &str) -> Option<&TargetEntry> {
        self.entries.iter().find(|e| e.name == name)
    }
}

/// A target is an environment preset when it is not a lint ruleset,
/// not the base language options, and not an override companion.
pub fn is_environment(name: &str) -> bool {
    !name.starts_with(LINT_RULESET_PREFIX)
        && name != BASE_OPTIONS_NAME
        && !name.ends_with(OVERRIDE_SUFFIX)
}

#[cfg(test)]
mod tests;
