//! Integration tests for locale table loading.

use std::fs;
use std::path::PathBuf;

use weft::{Catalog, Language, LoadError, LocaleNode, Resolved, key_paths, validate_parity};

// =========================================================================
// Bundled Site Copy
// =========================================================================

#[test]
fn bundled_tables_resolve_navigation() {
    let catalog = Catalog::bundled();
    assert_eq!(catalog.resolve(Language::En, "nav.work"), Resolved::Text("Work"));
    assert_eq!(
        catalog.resolve(Language::Sl, "nav.work"),
        Resolved::Text("Projekti")
    );
    assert_eq!(catalog.resolve(Language::Sl, "nav.about"), Resolved::Text("O Nas"));
}

#[test]
fn bundled_tables_resolve_hero_copy() {
    let catalog = Catalog::bundled();
    assert_eq!(
        catalog.resolve(Language::En, "home.hero.line1"),
        Resolved::Text("from idea to reality")
    );
    assert_eq!(
        catalog.resolve(Language::Sl, "home.hero.line1"),
        Resolved::Text("od ideje do izvedbe")
    );
}

#[test]
fn bundled_faqs_are_lists_of_records() {
    let catalog = Catalog::bundled();
    for language in Language::ALL {
        let faqs = catalog.resolve(language, "services.faqs").as_list().unwrap();
        assert_eq!(faqs.len(), 8, "{language}");
        assert!(faqs.iter().all(|faq| faq.get("q").is_some() && faq.get("a").is_some()));
    }
}

#[test]
fn bundled_tables_are_structurally_identical() {
    let catalog = Catalog::bundled();
    assert!(validate_parity(catalog, Language::En, Language::Sl).is_empty());
    assert_eq!(
        key_paths(catalog.table(Language::En)),
        key_paths(catalog.table(Language::Sl))
    );
}

#[test]
fn bundled_catalog_is_shared() {
    assert!(std::ptr::eq(Catalog::bundled(), Catalog::bundled()));
}

// =========================================================================
// Parsing From Strings
// =========================================================================

#[test]
fn from_json_strs_reports_syntax_errors_with_location() {
    let err = Catalog::from_json_strs("{}", "{\n  \"nav\": {\n    \"work\": \"Projekti\",\n  }\n}")
        .unwrap_err();
    match err {
        LoadError::Parse { path, line, .. } => {
            assert_eq!(path, PathBuf::from("<sl>"));
            assert_eq!(line, 4);
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn numbers_are_not_locale_values() {
    let err = Catalog::from_json_strs(r#"{ "plans": { "price": 250 } }"#, "{}").unwrap_err();
    match err {
        LoadError::Parse { path, message, .. } => {
            assert_eq!(path, PathBuf::from("<en>"));
            assert_eq!(message, "locale values must be strings, arrays or objects");
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn root_must_be_an_object() {
    let err = Catalog::from_json_strs(r#"["Work"]"#, "{}").unwrap_err();
    assert!(matches!(err, LoadError::RootNotMapping { .. }));
    assert_eq!(err.to_string(), "<en>: locale table root must be an object");
}

#[test]
fn new_rejects_leaf_roots() {
    let err = Catalog::new(LocaleNode::map([("nav", LocaleNode::from("x"))]), "Work".into())
        .unwrap_err();
    assert!(matches!(err, LoadError::RootNotMapping { path } if path == PathBuf::from("<sl>")));
}

#[test]
fn new_accepts_mapping_roots() {
    let catalog = Catalog::new(
        LocaleNode::map([("nav", LocaleNode::map([("work", "Work".into())]))]),
        LocaleNode::map([("nav", LocaleNode::map([("work", "Projekti".into())]))]),
    )
    .unwrap();
    assert_eq!(catalog.resolve(Language::Sl, "nav.work"), Resolved::Text("Projekti"));
}

// =========================================================================
// Loading From Disk
// =========================================================================

#[test]
fn load_dir_reads_both_tables() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("en.json"), r#"{ "nav": { "work": "Work" } }"#).unwrap();
    fs::write(dir.path().join("sl.json"), r#"{ "nav": { "work": "Projekti" } }"#).unwrap();

    let catalog = Catalog::load_dir(dir.path()).unwrap();
    assert_eq!(catalog.resolve(Language::En, "nav.work"), Resolved::Text("Work"));
    assert_eq!(
        catalog.resolve(Language::Sl, "nav.work"),
        Resolved::Text("Projekti")
    );
}

#[test]
fn load_dir_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("en.json"), "{}").unwrap();

    let err = Catalog::load_dir(dir.path()).unwrap_err();
    match err {
        LoadError::Io { path, .. } => assert_eq!(path, dir.path().join("sl.json")),
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn load_dir_labels_parse_errors_with_file_path() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("en.json"), "{ \"nav\": ").unwrap();
    fs::write(dir.path().join("sl.json"), "{}").unwrap();

    let err = Catalog::load_dir(dir.path()).unwrap_err();
    let path = dir.path().join("en.json");
    assert!(matches!(err, LoadError::Parse { path: ref p, .. } if *p == path));
    assert!(err.to_string().starts_with(&path.display().to_string()));
}

// =========================================================================
// Error Display
// =========================================================================

#[test]
fn parse_error_displays_location() {
    let err = LoadError::Parse {
        path: PathBuf::from("locales/sl.json"),
        line: 42,
        column: 15,
        message: "trailing comma".to_string(),
    };
    assert_eq!(err.to_string(), "locales/sl.json:42:15: trailing comma");
}
