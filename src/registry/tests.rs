use super::*;

#[test]
fn test_builtin_registry_has_core_targets() {
    let registry = TargetRegistry::builtin();

    assert!(registry.entry("js").is_some());
    assert!(registry.entry("lints-js").is_some());
    assert!(registry.entry("node").is_some());
    assert!(registry.entry("react").is_some());
}

#[test]
fn test_unknown_name_lookup() {
    let registry = TargetRegistry::builtin();
    assert!(registry.entry("doesnotexist").is_none());
}

#[test]
fn test_unknown_of_preserves_request_order() {
    let registry = TargetRegistry::builtin();
    let requested = vec![
        "zzz".to_string(),
        "node".to_string(),
        "aaa".to_string(),
    ];

    assert_eq!(registry.unknown_of(&requested), vec!["zzz", "aaa"]);
}

#[test]
fn test_default_files_are_literals() {
    let registry = TargetRegistry::builtin();
    let entry = registry.entry("lints-ts").unwrap();

    // Literal source text, brackets included
    assert!(entry.default_files.starts_with('['));
    assert!(entry.default_files.ends_with(']'));
}

#[test]
fn test_is_environment_classification() {
    // Environments: plain preset names
    assert!(is_environment("node"));
    assert!(is_environment("browser"));
    assert!(is_environment("react"));

    // Not environments: rulesets, base options, override companions
    assert!(!is_environment("lints-js"));
    assert!(!is_environment("lints-ts"));
    assert!(!is_environment("js"));
    assert!(!is_environment("react-overrides"));
}
