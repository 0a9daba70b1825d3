use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use icu_locale_core::LanguageIdentifier;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the two languages the site is published in.
///
/// The set is closed: locale tables exist for exactly these codes and no
/// further languages can be registered at runtime.
///
/// # Example
///
/// ```
/// use weft::Language;
///
/// let sl: Language = "sl".parse().unwrap();
/// assert_eq!(sl.code(), "sl");
/// assert_eq!(sl.toggled(), Language::En);
/// assert_eq!(Language::negotiate("sl-SI"), Some(Language::Sl));
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English, the default and the language of the source tables.
    #[default]
    En,

    /// Slovenian.
    Sl,
}

impl Language {
    /// Every supported language, English first.
    pub const ALL: [Language; 2] = [Language::En, Language::Sl];

    /// The two-letter code used in storage, `lang` attributes and query strings.
    pub const fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Sl => "sl",
        }
    }

    /// The Open Graph locale advertised for pages in this language.
    pub const fn og_locale(self) -> &'static str {
        match self {
            Language::En => "en_US",
            Language::Sl => "sl_SI",
        }
    }

    /// The other language, as flipped by the header toggle.
    pub const fn toggled(self) -> Language {
        match self {
            Language::En => Language::Sl,
            Language::Sl => Language::En,
        }
    }

    /// Map an arbitrary BCP-47 tag (`sl-SI`, `en-GB`, `EN`) onto a supported
    /// language by its language subtag.
    ///
    /// Returns `None` for malformed tags and for languages the site does not
    /// carry.
    pub fn negotiate(tag: &str) -> Option<Language> {
        let identifier = LanguageIdentifier::try_from_str(tag.trim()).ok()?;
        match identifier.language.as_str() {
            "en" => Some(Language::En),
            "sl" => Some(Language::Sl),
            _ => None,
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.code())
    }
}

/// A language code other than `en` or `sl`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language '{code}', expected one of: en, sl")]
pub struct UnknownLanguage {
    pub code: String,
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    /// Parses an exact two-letter code. Use [`Language::negotiate`] for full tags.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "sl" => Ok(Language::Sl),
            _ => Err(UnknownLanguage {
                code: s.to_string(),
            }),
        }
    }
}
