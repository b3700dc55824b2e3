//! Override-block locator and remover.
//!
//! An override block is a quoted target name followed by `:` and a brace-
//! delimited object. Blocks may nest arbitrary object literals, so the
//! closing brace is found with an explicit depth counter, not a regex.

use crate::utils::regex_cache::get_cached_regex;
use regex::Regex;
use std::sync::LazyLock;

static OVERRIDES_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"overrides\s*:\s*\{").expect("hard-coded pattern"));

/// Two adjacent entries whose separating comma was lost to an excision.
static GLUE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\}(\s*)(["'][^"'\n]+["']\s*:\s*\{)"#).expect("hard-coded pattern")
});

/// An `overrides` object left empty, allowing one stray comma inside.
static EMPTY_OVERRIDES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"overrides\s*:\s*\{\s*,?\s*\},?").expect("hard-coded pattern"));

/// A dangling trailing comma right before a closing brace.
static DANGLING_COMMA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",(\s*)\}").expect("hard-coded pattern"));

pub(crate) fn overrides_present(text: &str) -> bool {
    OVERRIDES_KEY_RE.is_match(text)
}

/// Excise the override block keyed by `name`, if one exists.
///
/// The removed span starts at an optional leading comma/whitespace and an
/// optional single-line comment, covers the quoted key, and runs to the
/// brace that balances the block's opening one; a comma immediately after
/// the closing brace is taken with it. A missing block is not an error; a
/// target may legitimately have no override.
pub(crate) fn remove_block(text: &str, name: &str) -> Option<String> {
    let pattern = format!(
        r#",?\s*(?://[^\n]*\n[ \t]*)?["']{}["']\s*:\s*\{{"#,
        regex::escape(name)
    );
    let re = get_cached_regex(&pattern).ok()?;
    let m = re.find(text)?;

    // Depth walk from the block's opening brace, the last byte of the match.
    let open = m.end() - 1;
    let mut depth = 0i32;
    let mut close = None;
    for (i, ch) in text[open..].char_indices() {
        match ch {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    close = Some(open + i + 1);
                    break;
                }
            }
            _ => {}
        }
    }

    let mut end = close?;
    if text[end..].starts_with(',') {
        end += 1;
    }

    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..m.start()]);
    out.push_str(&text[end..]);
    Some(out)
}

/// Cleanup applied once after all per-target removals of a call:
/// re-separate entries left adjacent by an excision, drop a now-empty
/// `overrides` object, and strip dangling commas before closing braces.
/// Residual blank lines are acceptable as long as the text still parses.
pub(crate) fn normalize(text: &str) -> String {
    let out = GLUE_RE.replace_all(text, "},${1}${2}");
    let out = EMPTY_OVERRIDES_RE.replace_all(&out, "");
    DANGLING_COMMA_RE.replace_all(&out, "${1}}").to_string()
}
