//! Config-text engine
//!
//! Parses and rewrites generated config files as raw text. The engine only
//! understands the dialect the generator itself emits (a multi-line
//! `with: [ ... ]` array plus an optional `overrides: { ... }` object);
//! it is a best-effort line/regex/brace-counting rewriter, not a parser
//! for arbitrary JavaScript.
//!
//! All operations are stateless, single-shot transformations over an
//! in-memory string. Callers read the file, transform, and write back.

mod overrides;
mod parser;
mod render;

#[cfg(test)]
mod tests;

pub use parser::parse_targets;
pub use render::render_config;

use crate::registry::TargetLookup;
use parser::{NAME_LINE_RE, WithRegion, locate_with_region};
use render::entry_line;
use serde::Serialize;

/// Manifest of a removal run. Targets and overrides stay in lock-step:
/// a name appears in `removed_overrides` exactly when its block was
/// excised from the text.
#[derive(Debug, Serialize)]
pub struct RemoveOutcome {
    pub success: bool,
    pub removed_targets: Vec<String>,
    pub removed_overrides: Vec<String>,
}

/// Append `new_targets` to the existing `with` array, leaving every byte
/// outside that region untouched. Callers pre-filter the list so it is
/// disjoint from the active set. Returns `None` when no multi-line `with`
/// array can be located.
pub fn add_targets(
    text: &str,
    new_targets: &[String],
    registry: &dyn TargetLookup,
) -> Option<String> {
    let region = locate_with_region(text)?;
    let mut interior = region.interior.clone();

    // The last existing entry needs a separator before new lines follow
    // it. The generated dialect always carries one; an interior with no
    // comma at all gets one inserted after its last name token.
    if !interior.contains(',') {
        if let Some(at) = last_name_end(&interior) {
            interior.insert(at, ',');
        }
    }
    if !interior.is_empty() && !interior.ends_with('\n') {
        interior.push('\n');
    }

    let indent = entry_indent(&interior, &region.close_indent);
    for name in new_targets {
        interior.push_str(&entry_line(name, &indent, registry));
        interior.push('\n');
    }

    Some(splice_region(text, &region, &interior))
}

/// Rebuild the `with` array from `remaining` and excise the override
/// blocks of every name in `removed`, in request order, each scan running
/// against the text as mutated so far. Returns the new text plus the
/// names whose override block was actually found. `None` when the
/// remainder would be empty or the array cannot be located.
pub fn remove_targets(
    text: &str,
    remaining: &[String],
    removed: &[String],
    registry: &dyn TargetLookup,
) -> Option<(String, Vec<String>)> {
    if remaining.is_empty() {
        return None;
    }
    let region = locate_with_region(text)?;

    // Unlike add, remove regenerates every entry line from scratch;
    // custom trailing comments on surviving lines are not preserved.
    let indent = entry_indent(&region.interior, &region.close_indent);
    let mut interior = String::new();
    for name in remaining {
        interior.push_str(&entry_line(name, &indent, registry));
        interior.push('\n');
    }
    let mut out = splice_region(text, &region, &interior);

    let mut removed_overrides = Vec::new();
    if overrides::overrides_present(&out) {
        for name in removed {
            if let Some(next) = overrides::remove_block(&out, name) {
                out = next;
                removed_overrides.push(name.clone());
            }
        }
        out = overrides::normalize(&out);
    }

    Some((out, removed_overrides))
}

/// Replace the `with: [ ... ]` region with a reconstructed one holding
/// `interior`, preserving all surrounding text byte-for-byte.
fn splice_region(text: &str, region: &WithRegion, interior: &str) -> String {
    let mut out = String::with_capacity(text.len() + interior.len());
    out.push_str(&text[..region.start]);
    out.push_str("with: [\n");
    out.push_str(interior);
    out.push_str(&region.close_indent);
    out.push(']');
    out.push_str(&text[region.end..]);
    out
}

/// Byte offset just past the closing quote of the last name token in the
/// interior, if any.
fn last_name_end(interior: &str) -> Option<usize> {
    let mut offset = 0;
    let mut result = None;
    for line in interior.split_inclusive('\n') {
        if let Some(m) = NAME_LINE_RE.find(line) {
            result = Some(offset + m.end());
        }
        offset += line.len();
    }
    result
}

/// Indentation for new entry lines: whatever the last existing entry
/// uses, or one level deeper than the closing bracket.
fn entry_indent(interior: &str, close_indent: &str) -> String {
    for line in interior.lines().rev() {
        if NAME_LINE_RE.is_match(line) {
            let trimmed = line.trim_start();
            return line[..line.len() - trimmed.len()].to_string();
        }
    }
    format!("{close_indent}  ")
}
