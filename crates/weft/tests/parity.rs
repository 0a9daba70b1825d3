//! Integration tests for table parity checks.

use weft::{
    Catalog, Coverage, Language, LocaleNode, ParityWarning, Shape, compute_suggestions, coverage,
    key_paths, validate_parity,
};

fn catalog(en: &str, sl: &str) -> Catalog {
    Catalog::from_json_strs(en, sl).unwrap()
}

// =========================================================================
// Key Paths
// =========================================================================

#[test]
fn key_paths_lists_sorted_leaves() {
    let table: LocaleNode = serde_json::from_str(
        r#"{ "nav": { "work": "Work", "about": "About" }, "faqs": [{ "q": "?" }], "empty": {} }"#,
    )
    .unwrap();
    assert_eq!(key_paths(&table), vec!["faqs", "nav.about", "nav.work"]);
}

// =========================================================================
// Warnings
// =========================================================================

#[test]
fn identical_tables_have_no_warnings() {
    let catalog = catalog(
        r#"{ "nav": { "work": "Work" } }"#,
        r#"{ "nav": { "work": "Projekti" } }"#,
    );
    assert!(validate_parity(&catalog, Language::En, Language::Sl).is_empty());
}

#[test]
fn missing_subtree_reports_every_leaf() {
    let catalog = catalog(
        r#"{ "nav": { "work": "Work" }, "footer": { "tagline": "t", "rights": "r" } }"#,
        r#"{ "nav": { "work": "Projekti" } }"#,
    );
    let warnings = validate_parity(&catalog, Language::En, Language::Sl);
    assert_eq!(
        warnings,
        vec![
            ParityWarning::MissingKey {
                key: "footer.rights".to_string(),
                language: Language::Sl,
            },
            ParityWarning::MissingKey {
                key: "footer.tagline".to_string(),
                language: Language::Sl,
            },
        ]
    );
}

#[test]
fn unknown_key_carries_suggestions() {
    let catalog = catalog(
        r#"{ "nav": { "work": "Work", "about": "About" } }"#,
        r#"{ "nav": { "work": "Projekti", "about": "O Nas", "abuot": "O Nas" } }"#,
    );
    let warnings = validate_parity(&catalog, Language::En, Language::Sl);
    assert_eq!(
        warnings,
        vec![ParityWarning::UnknownKey {
            key: "nav.abuot".to_string(),
            language: Language::Sl,
            suggestions: vec!["nav.about".to_string()],
        }]
    );
    assert_eq!(
        warnings[0].to_string(),
        "'nav.abuot' in sl does not exist in the source (did you mean: nav.about?)"
    );
}

#[test]
fn shape_mismatch_is_reported_once() {
    let catalog = catalog(
        r#"{ "services": { "faqs": [{ "q": "?" }], "title": "Services" } }"#,
        r#"{ "services": { "faqs": { "q": "?" }, "title": "Storitve" } }"#,
    );
    let warnings = validate_parity(&catalog, Language::En, Language::Sl);
    assert_eq!(
        warnings,
        vec![ParityWarning::ShapeMismatch {
            key: "services.faqs".to_string(),
            language: Language::Sl,
            expected: Shape::List,
            found: Shape::Record,
        }]
    );
    assert_eq!(
        warnings[0].to_string(),
        "'services.faqs' is a record in sl, expected a list"
    );
}

#[test]
fn list_length_mismatch() {
    let catalog = catalog(
        r#"{ "tags": ["a", "b", "c"] }"#,
        r#"{ "tags": ["a"] }"#,
    );
    let warnings = validate_parity(&catalog, Language::En, Language::Sl);
    assert_eq!(
        warnings,
        vec![ParityWarning::ListLengthMismatch {
            key: "tags".to_string(),
            language: Language::Sl,
            expected: 3,
            found: 1,
        }]
    );
}

#[test]
fn warnings_are_sorted_by_key() {
    let catalog = catalog(
        r#"{ "b": "b", "d": "d" }"#,
        r#"{ "a": "a", "c": "c" }"#,
    );
    let keys: Vec<String> = validate_parity(&catalog, Language::En, Language::Sl)
        .iter()
        .map(|warning| warning.key().to_string())
        .collect();
    assert_eq!(keys, vec!["a", "b", "c", "d"]);
}

#[test]
fn reverse_direction_swaps_missing_and_unknown() {
    let catalog = catalog(r#"{ "a": "a", "b": "b" }"#, r#"{ "a": "a" }"#);
    let warnings = validate_parity(&catalog, Language::Sl, Language::En);
    assert!(matches!(
        &warnings[..],
        [ParityWarning::UnknownKey { key, language: Language::En, .. }] if key == "b"
    ));
}

// =========================================================================
// Coverage
// =========================================================================

#[test]
fn coverage_counts_resolving_leaves() {
    let catalog = catalog(
        r#"{ "nav": { "work": "Work", "about": "About", "diy": "DIY" }, "faqs": [] }"#,
        r#"{ "nav": { "work": "Projekti" }, "faqs": [] }"#,
    );
    assert_eq!(
        coverage(&catalog, Language::En, Language::Sl),
        Coverage {
            language: Language::Sl,
            translated: 2,
            total: 4,
            missing: vec!["nav.about".to_string(), "nav.diy".to_string()],
        }
    );
}

#[test]
fn bundled_coverage_is_complete() {
    let report = coverage(Catalog::bundled(), Language::En, Language::Sl);
    assert_eq!(report.translated, report.total);
    assert!(report.missing.is_empty());
    assert!(report.total > 300);
}

// =========================================================================
// Suggestions
// =========================================================================

#[test]
fn compute_suggestions_finds_similar_keys() {
    let available = vec![
        "nav.work".to_string(),
        "nav.about".to_string(),
        "nav.terms".to_string(),
    ];
    assert_eq!(compute_suggestions("nav.wrok", &available), vec!["nav.work"]);
    assert!(compute_suggestions("footer.tagline", &available).is_empty());
}

#[test]
fn compute_suggestions_short_keys_allow_one_edit() {
    let available = vec!["one".to_string(), "few".to_string()];
    assert_eq!(compute_suggestions("on", &available), vec!["one"]);
    assert!(compute_suggestions("xy", &available).is_empty());
}

#[test]
fn compute_suggestions_limits_to_three_closest_first() {
    let available: Vec<String> = ["item1", "item22", "item3", "item4", "item"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let suggestions = compute_suggestions("item", &available);
    assert_eq!(suggestions, vec!["item", "item1", "item3"]);
}
