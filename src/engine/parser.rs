//! Target-list parser
//!
//! Locates the `with: [ ... ]` region in config text and extracts the
//! ordered target names, one per line. Only the multi-line shape the
//! generator emits is supported: a `with` array collapsed onto a single
//! line yields an empty result, which callers read as "could not parse".

use regex::Regex;
use std::sync::LazyLock;

/// Opening of the `with` array. Spacing around the colon is irrelevant.
static WITH_OPEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"with\s*:\s*\[").expect("hard-coded pattern"));

/// A quoted name token at the start of a line, either quote style.
pub(crate) static NAME_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^[ \t]*["']([^"']+)["']"#).expect("hard-coded pattern"));

/// The located `with` array region.
///
/// `interior` is the text between the line holding the opening bracket
/// and the line holding the closing one; `start..end` spans from the
/// `with` keyword to just past the `]`.
pub(crate) struct WithRegion {
    pub start: usize,
    pub end: usize,
    pub interior: String,
    pub close_indent: String,
}

pub(crate) fn locate_with_region(text: &str) -> Option<WithRegion> {
    let open = WITH_OPEN_RE.find(text)?;

    // Interior starts on the line after the opening bracket. A file with
    // no newline after the bracket is the single-line shape we do not
    // support.
    let first_newline = text[open.end()..].find('\n')?;
    let interior_start = open.end() + first_newline + 1;

    let mut offset = interior_start;
    for line in text[interior_start..].split_inclusive('\n') {
        let trimmed = line.trim_start();
        if trimmed.starts_with(']') {
            let indent_len = line.len() - trimmed.len();
            return Some(WithRegion {
                start: open.start(),
                end: offset + indent_len + 1,
                interior: text[interior_start..offset].to_string(),
                close_indent: line[..indent_len].to_string(),
            });
        }
        offset += line.len();
    }
    None
}

/// Ordered active target names, or empty when no multi-line `with` array
/// is present. Lines without a leading quoted token (blank lines, stray
/// commas) are skipped silently.
pub fn parse_targets(text: &str) -> Vec<String> {
    let Some(region) = locate_with_region(text) else {
        return Vec::new();
    };

    region
        .interior
        .lines()
        .filter_map(|line| NAME_LINE_RE.captures(line))
        .map(|caps| caps[1].to_string())
        .collect()
}
