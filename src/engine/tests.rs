use super::*;
use crate::registry::{TargetEntry, TargetLookup, TargetRegistry};

fn registry() -> TargetRegistry {
    TargetRegistry::builtin()
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// A generated config with a hand-edited overrides object using mixed
/// quote styles and nested object literals.
fn config_with_overrides() -> String {
    concat!(
        "import uglify from \"eslint-config-uglify\"\n",
        "\n",
        "export default [\n",
        "  ...uglify({\n",
        "    with: [\n",
        "      \"lints-js\", // default files: []\n",
        "      'node', // default files: []\n",
        "      \"react\", // default files: []\n",
        "    ],\n",
        "    overrides: {\n",
        "      \"node\": {\n",
        "        rules: { \"no-process-exit\": \"off\", nested: { deep: true } }\n",
        "      },\n",
        "      'react': {\n",
        "        settings: { react: { version: \"detect\" } }\n",
        "      }\n",
        "    }\n",
        "  })\n",
        "]\n",
    )
    .to_string()
}

// --- parsing ---

#[test]
fn test_round_trip_parse() {
    let targets = names(&["js", "lints-js", "node", "react"]);
    let text = render_config(&targets, &registry());

    assert_eq!(parse_targets(&text), targets);
}

#[test]
fn test_parse_mixed_quote_styles() {
    let text = config_with_overrides();
    assert_eq!(parse_targets(&text), names(&["lints-js", "node", "react"]));
}

#[test]
fn test_parse_skips_blank_lines_and_stray_commas() {
    let text = concat!(
        "export default [\n",
        "  ...uglify({\n",
        "    with: [\n",
        "\n",
        "      \"js\", // default files: []\n",
        "      ,\n",
        "      'node',\n",
        "    ]\n",
        "  })\n",
        "]\n",
    );

    assert_eq!(parse_targets(text), names(&["js", "node"]));
}

#[test]
fn test_parse_single_line_array_is_unsupported() {
    let text = "export default [...uglify({ with: [\"js\"] })]";
    assert!(parse_targets(text).is_empty());
}

#[test]
fn test_parse_missing_with_key() {
    let text = "export default [\n  ...uglify({})\n]\n";
    assert!(parse_targets(text).is_empty());
}

// --- add ---

#[test]
fn test_add_is_additive_and_order_preserving() {
    let existing = names(&["js", "lints-js"]);
    let text = render_config(&existing, &registry());

    let updated = add_targets(&text, &names(&["node", "react"]), &registry()).unwrap();

    assert_eq!(
        parse_targets(&updated),
        names(&["js", "lints-js", "node", "react"])
    );
}

#[test]
fn test_add_preserves_text_outside_the_array() {
    let text = config_with_overrides();
    let updated = add_targets(&text, &names(&["vitest"]), &registry()).unwrap();

    // Everything before the `with` keyword and after the closing bracket
    // is byte-identical, overrides included.
    let prefix = &text[..text.find("with:").unwrap()];
    let suffix = &text[text.find("    ],").unwrap()..];
    assert!(updated.starts_with(prefix));
    assert!(updated.ends_with(suffix));
    assert!(updated.contains("rules: { \"no-process-exit\": \"off\", nested: { deep: true } }"));
    assert!(updated.contains("settings: { react: { version: \"detect\" } }"));
}

#[test]
fn test_add_keeps_custom_trailing_comments() {
    let text = concat!(
        "export default [\n",
        "  ...uglify({\n",
        "    with: [\n",
        "      \"js\", // pinned for legacy builds\n",
        "    ]\n",
        "  })\n",
        "]\n",
    );

    let updated = add_targets(text, &names(&["node"]), &registry()).unwrap();

    assert!(updated.contains("\"js\", // pinned for legacy builds"));
    assert_eq!(parse_targets(&updated), names(&["js", "node"]));
}

#[test]
fn test_add_inserts_missing_separator_comma() {
    // Hand-edited interior with no comma after the only entry
    let text = concat!(
        "export default [\n",
        "  ...uglify({\n",
        "    with: [\n",
        "      \"js\" // default files: []\n",
        "    ]\n",
        "  })\n",
        "]\n",
    );

    let updated = add_targets(text, &names(&["node"]), &registry()).unwrap();

    assert!(updated.contains("\"js\", // default files: []"));
    assert_eq!(parse_targets(&updated), names(&["js", "node"]));
}

#[test]
fn test_add_without_with_array_fails() {
    let text = "export default [\n  ...uglify({})\n]\n";
    assert!(add_targets(text, &names(&["node"]), &registry()).is_none());
}

// --- remove ---

#[test]
fn test_remove_preserves_remainder_order() {
    let targets = names(&["js", "lints-js", "node", "react"]);
    let text = render_config(&targets, &registry());

    let remaining = names(&["js", "node"]);
    let removed = names(&["lints-js", "react"]);
    let (updated, _) = remove_targets(&text, &remaining, &removed, &registry()).unwrap();

    assert_eq!(parse_targets(&updated), remaining);
}

#[test]
fn test_remove_rejects_empty_remainder() {
    let text = render_config(&names(&["js"]), &registry());
    assert!(remove_targets(&text, &[], &names(&["js"]), &registry()).is_none());
}

#[test]
fn test_remove_excises_override_in_lock_step() {
    let text = config_with_overrides();

    let (updated, removed_overrides) = remove_targets(
        &text,
        &names(&["lints-js", "node"]),
        &names(&["react"]),
        &registry(),
    )
    .unwrap();

    assert_eq!(parse_targets(&updated), names(&["lints-js", "node"]));
    assert_eq!(removed_overrides, names(&["react"]));

    // The react block is gone, key and body
    assert!(!updated.contains("'react':"));
    assert!(!updated.contains("settings: { react:"));

    // The node block survives intact, nested braces and all
    assert!(updated.contains("\"node\": {"));
    assert!(updated.contains("rules: { \"no-process-exit\": \"off\", nested: { deep: true } }"));
}

#[test]
fn test_remove_override_quote_style_invariance() {
    // Double-quoted request removes a single-quoted key and vice versa
    let text = config_with_overrides();

    let (updated, removed_overrides) = remove_targets(
        &text,
        &names(&["lints-js", "react"]),
        &names(&["node"]),
        &registry(),
    )
    .unwrap();

    assert_eq!(removed_overrides, names(&["node"]));
    assert!(!updated.contains("\"node\": {"));
    assert!(updated.contains("'react': {"));
}

#[test]
fn test_remove_collapses_empty_overrides_object() {
    let text = config_with_overrides();

    let (updated, removed_overrides) = remove_targets(
        &text,
        &names(&["lints-js"]),
        &names(&["node", "react"]),
        &registry(),
    )
    .unwrap();

    assert_eq!(removed_overrides, names(&["node", "react"]));
    assert!(!updated.contains("overrides"));
    assert_eq!(parse_targets(&updated), names(&["lints-js"]));
}

#[test]
fn test_remove_middle_override_restores_separator() {
    let text = concat!(
        "export default [\n",
        "  ...uglify({\n",
        "    with: [\n",
        "      \"browser\", // default files: []\n",
        "      \"node\", // default files: []\n",
        "      \"react\", // default files: []\n",
        "    ],\n",
        "    overrides: {\n",
        "      \"browser\": {\n",
        "        languageOptions: { globals: { window: true } }\n",
        "      },\n",
        "      \"node\": {\n",
        "        rules: { \"no-sync\": \"warn\" }\n",
        "      },\n",
        "      \"react\": {\n",
        "        settings: { version: \"detect\" }\n",
        "      }\n",
        "    }\n",
        "  })\n",
        "]\n",
    );

    let (updated, removed_overrides) = remove_targets(
        text,
        &names(&["browser", "react"]),
        &names(&["node"]),
        &registry(),
    )
    .unwrap();

    assert_eq!(removed_overrides, names(&["node"]));
    // Excising the middle entry ate both separators; the pass puts one back
    assert!(updated.contains("},\n      \"react\": {"));
    assert!(updated.contains("\"browser\": {"));
}

#[test]
fn test_remove_override_with_leading_comment_line() {
    let text = concat!(
        "export default [\n",
        "  ...uglify({\n",
        "    with: [\n",
        "      \"js\", // default files: []\n",
        "      \"node\", // default files: []\n",
        "    ],\n",
        "    overrides: {\n",
        "      // tuned for long-running daemons\n",
        "      \"node\": {\n",
        "        rules: { \"no-sync\": \"error\" }\n",
        "      }\n",
        "    }\n",
        "  })\n",
        "]\n",
    );

    let (updated, removed_overrides) =
        remove_targets(text, &names(&["js"]), &names(&["node"]), &registry()).unwrap();

    assert_eq!(removed_overrides, names(&["node"]));
    assert!(!updated.contains("tuned for long-running daemons"));
    assert!(!updated.contains("overrides"));
}

#[test]
fn test_remove_without_override_block_reports_nothing() {
    let text = render_config(&names(&["js", "node"]), &registry());

    let (updated, removed_overrides) =
        remove_targets(&text, &names(&["js"]), &names(&["node"]), &registry()).unwrap();

    assert!(removed_overrides.is_empty());
    assert_eq!(parse_targets(&updated), names(&["js"]));
}

// --- rendering ---

#[test]
fn test_render_includes_default_file_literals() {
    let text = render_config(&names(&["lints-ts"]), &registry());

    assert!(text.contains("import uglify from \"eslint-config-uglify\""));
    assert!(text.contains("\"lints-ts\", // default files: [\"**/*.ts\", \"**/*.tsx\"]"));
}

#[test]
fn test_render_falls_back_to_empty_literal_for_unknown_names() {
    struct EmptyLookup;
    impl TargetLookup for EmptyLookup {
        fn entry(&self, _name: &str) -> Option<&TargetEntry> {
            None
        }
    }

    let text = render_config(&names(&["mystery"]), &EmptyLookup);
    assert!(text.contains("\"mystery\", // default files: []"));
}
