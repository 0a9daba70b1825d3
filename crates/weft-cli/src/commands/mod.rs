//! CLI command implementations.

mod check;
mod coverage;
mod head;
mod prefs;
mod resolve;
mod sitemap;

use std::borrow::Cow;

use miette::Result;
use tracing::debug;
use weft::preferences::LANGUAGE_KEY;
use weft::{Catalog, FileStore, Language, Localizer, MemoryStore, PreferenceStore, UnknownLanguage};

use crate::output::load_report;
use crate::Context;

pub use check::{run_check, CheckArgs};
pub use coverage::{run_coverage, CoverageArgs};
pub use head::{run_head, HeadArgs};
pub use prefs::{run_prefs, PrefsArgs};
pub use resolve::{run_resolve, ResolveArgs};
pub use sitemap::{run_sitemap, SitemapArgs};

/// The tables from `--locales`, or the bundled ones.
fn load_catalog(context: &Context) -> Result<Cow<'static, Catalog>> {
    match &context.locales {
        Some(dir) => {
            debug!(dir = %dir.display(), "loading locale tables");
            Catalog::load_dir(dir).map(Cow::Owned).map_err(load_report)
        }
        None => Ok(Cow::Borrowed(Catalog::bundled())),
    }
}

/// A localizer in `language`, or in the language stored in the preferences
/// file when none is given.
///
/// An explicit language is never written back to the preferences file.
fn localizer<'c>(
    catalog: &'c Catalog,
    context: &Context,
    language: Option<Language>,
) -> Localizer<'c, Box<dyn PreferenceStore>> {
    let store: Box<dyn PreferenceStore> = match language {
        Some(language) => Box::new(MemoryStore::new().with(LANGUAGE_KEY, language.code())),
        None => Box::new(FileStore::open(&context.prefs)),
    };
    Localizer::new(catalog, store)
}

/// Parse a `--lang` value, accepting full tags such as `sl-SI`.
pub fn parse_language(value: &str) -> Result<Language, UnknownLanguage> {
    Language::negotiate(value).ok_or_else(|| UnknownLanguage {
        code: value.to_string(),
    })
}
