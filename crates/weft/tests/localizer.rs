//! Integration tests for locale selection and preference restore.

use weft::preferences::{INVERT_COLORS_KEY, LANGUAGE_KEY};
use weft::{Catalog, FileStore, Language, LocaleNode, Localizer, MemoryStore, PreferenceStore, Resolved};

fn catalog() -> Catalog {
    Catalog::from_json_strs(
        r#"{
            "nav": { "work": "Work" },
            "footer": { "tagline": "" },
            "services": {
                "faqs": [{ "q": "Who owns the code?", "a": "You do." }],
                "stack": ["React", { "name": "Rust" }, "Vite"]
            }
        }"#,
        r#"{
            "nav": { "work": "Projekti" },
            "services": { "faqs": [{ "q": "Kdo je lastnik kode?", "a": "Vi." }] }
        }"#,
    )
    .unwrap()
}

// =========================================================================
// Initial State
// =========================================================================

#[test]
fn defaults_to_english_without_stored_preference() {
    let catalog = catalog();
    let localizer = Localizer::new(&catalog, MemoryStore::new());
    assert_eq!(localizer.active_locale(), Language::En);
    assert!(!localizer.invert_colors());
}

#[test]
fn restores_stored_slovenian() {
    let catalog = catalog();
    let store = MemoryStore::new().with(LANGUAGE_KEY, "sl");
    let localizer = Localizer::new(&catalog, store);
    assert_eq!(localizer.active_locale(), Language::Sl);
}

#[test]
fn invalid_stored_language_falls_back_to_english() {
    let catalog = catalog();
    for stored in ["de", "SL", "sl-SI", ""] {
        let store = MemoryStore::new().with(LANGUAGE_KEY, stored);
        let localizer = Localizer::new(&catalog, store);
        assert_eq!(localizer.active_locale(), Language::En, "stored {stored:?}");
    }
}

#[test]
fn restores_invert_colors_only_for_one() {
    let catalog = catalog();
    let on = Localizer::new(&catalog, MemoryStore::new().with(INVERT_COLORS_KEY, "1"));
    let off = Localizer::new(&catalog, MemoryStore::new().with(INVERT_COLORS_KEY, "0"));
    let junk = Localizer::new(&catalog, MemoryStore::new().with(INVERT_COLORS_KEY, "true"));
    assert!(on.invert_colors());
    assert!(!off.invert_colors());
    assert!(!junk.invert_colors());
}

// =========================================================================
// Switching Languages
// =========================================================================

#[test]
fn locale_switch_changes_resolution_and_back() {
    let catalog = catalog();
    let mut localizer = Localizer::new(&catalog, MemoryStore::new());
    assert_eq!(localizer.resolve("nav.work"), Resolved::Text("Work"));

    localizer.set_active_locale(Language::Sl);
    assert_eq!(localizer.resolve("nav.work"), Resolved::Text("Projekti"));

    localizer.set_active_locale(Language::En);
    assert_eq!(localizer.resolve("nav.work"), Resolved::Text("Work"));
}

#[test]
fn set_active_locale_persists_immediately() {
    let catalog = catalog();
    let mut localizer = Localizer::new(&catalog, MemoryStore::new());

    localizer.set_active_locale(Language::Sl);
    assert_eq!(localizer.store().get(LANGUAGE_KEY), Some("sl".to_string()));

    localizer.set_active_locale(Language::En);
    assert_eq!(localizer.store().get(LANGUAGE_KEY), Some("en".to_string()));
}

#[test]
fn toggle_language_alternates() {
    let catalog = catalog();
    let mut localizer = Localizer::new(&catalog, MemoryStore::new());
    assert_eq!(localizer.toggle_language(), Language::Sl);
    assert_eq!(localizer.active_locale(), Language::Sl);
    assert_eq!(localizer.toggle_language(), Language::En);
    assert_eq!(localizer.store().get(LANGUAGE_KEY), Some("en".to_string()));
}

#[test]
fn key_present_only_in_english_misses_after_switch() {
    let catalog = catalog();
    let mut localizer = Localizer::new(&catalog, MemoryStore::new());
    assert_eq!(localizer.resolve("footer.tagline"), Resolved::Text(""));

    localizer.set_active_locale(Language::Sl);
    assert_eq!(localizer.resolve("footer.tagline"), Resolved::Miss("footer.tagline"));
}

// =========================================================================
// Persistence Round-Trip
// =========================================================================

#[test]
fn memory_store_survives_a_fresh_context() {
    let catalog = catalog();
    let mut localizer = Localizer::new(&catalog, MemoryStore::new());
    localizer.set_active_locale(Language::Sl);
    localizer.set_invert_colors(true);

    let reloaded = Localizer::new(&catalog, localizer.into_store());
    assert_eq!(reloaded.active_locale(), Language::Sl);
    assert!(reloaded.invert_colors());
}

#[test]
fn borrowed_store_survives_a_fresh_context() {
    let catalog = catalog();
    let mut store = MemoryStore::new();
    {
        let mut localizer = Localizer::new(&catalog, &mut store);
        localizer.set_active_locale(Language::Sl);
    }
    let reloaded = Localizer::new(&catalog, &mut store);
    assert_eq!(reloaded.active_locale(), Language::Sl);
}

#[test]
fn file_store_survives_a_fresh_process() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");
    let catalog = catalog();

    let mut localizer = Localizer::new(&catalog, FileStore::open(&path));
    localizer.set_active_locale(Language::Sl);
    localizer.toggle_invert_colors();
    drop(localizer);

    let reloaded = Localizer::new(&catalog, FileStore::open(&path));
    assert_eq!(reloaded.active_locale(), Language::Sl);
    assert!(reloaded.invert_colors());
    assert_eq!(reloaded.text("nav.work"), "Projekti");
}

// =========================================================================
// Rendering Helpers
// =========================================================================

#[test]
fn text_renders_misses_as_key() {
    let catalog = catalog();
    let localizer = Localizer::new(&catalog, MemoryStore::new());
    assert_eq!(localizer.text("nav.work"), "Work");
    assert_eq!(localizer.text("about.nonexistent.field"), "about.nonexistent.field");
}

#[test]
fn text_renders_non_text_values_as_key() {
    let catalog = catalog();
    let localizer = Localizer::new(&catalog, MemoryStore::new());
    assert_eq!(localizer.text("services.faqs"), "services.faqs");
    assert_eq!(localizer.text("nav"), "nav");
}

#[test]
fn list_is_empty_on_miss_or_wrong_shape() {
    let catalog = catalog();
    let localizer = Localizer::new(&catalog, MemoryStore::new());
    assert_eq!(localizer.list("services.faqs").len(), 1);
    assert!(localizer.list("services.missing").is_empty());
    assert!(localizer.list("nav.work").is_empty());
}

#[test]
fn texts_skips_record_items() {
    let catalog = catalog();
    let localizer = Localizer::new(&catalog, MemoryStore::new());
    assert_eq!(localizer.texts("services.stack"), vec!["React", "Vite"]);
}

#[derive(Debug, PartialEq, serde::Deserialize)]
struct Faq {
    q: String,
    a: String,
}

#[test]
fn records_follow_the_active_locale() {
    let catalog = catalog();
    let mut localizer = Localizer::new(&catalog, MemoryStore::new());
    let english: Vec<Faq> = localizer.records("services.faqs").unwrap();
    assert_eq!(english[0].a, "You do.");

    localizer.set_active_locale(Language::Sl);
    let slovenian: Vec<Faq> = localizer.records("services.faqs").unwrap();
    assert_eq!(
        slovenian,
        vec![Faq {
            q: "Kdo je lastnik kode?".to_string(),
            a: "Vi.".to_string(),
        }]
    );
}

#[test]
fn resolution_reads_through_to_the_catalog() {
    let catalog = catalog();
    let localizer = Localizer::new(&catalog, MemoryStore::new());
    assert_eq!(
        localizer.resolve("nav").to_node(),
        Some(LocaleNode::map([("work", LocaleNode::from("Work"))]))
    );
}
