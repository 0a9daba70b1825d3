use bon::Builder;
use serde_json::Value as JsonValue;

use crate::types::Language;

/// The site name advertised through `og:site_name`.
pub const SITE_NAME: &str = "WHITEWEAVER Studio";

/// The Open Graph object type of a page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OgType {
    #[default]
    Website,
    Article,
    Product,
    Profile,
}

impl OgType {
    pub fn as_str(self) -> &'static str {
        match self {
            OgType::Website => "website",
            OgType::Article => "article",
            OgType::Product => "product",
            OgType::Profile => "profile",
        }
    }
}

/// A language-alternate link (`<link rel="alternate" hreflang=..>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alternate {
    pub href_lang: String,
    pub href: String,
}

impl Alternate {
    pub fn new(href_lang: impl Into<String>, href: impl Into<String>) -> Self {
        Alternate {
            href_lang: href_lang.into(),
            href: href.into(),
        }
    }
}

/// The `en`, `sl` and `x-default` alternates for a path.
///
/// Slovenian is addressed through the `lang=sl` query parameter.
pub fn language_alternates(path: &str) -> Vec<Alternate> {
    let separator = if path.contains('?') { '&' } else { '?' };
    vec![
        Alternate::new(Language::En.code(), path),
        Alternate::new(
            Language::Sl.code(),
            format!("{path}{separator}lang={}", Language::Sl.code()),
        ),
        Alternate::new("x-default", path),
    ]
}

/// One element of the document head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadTag {
    /// `<title>`.
    Title(String),

    /// `<meta name=.. content=..>`.
    MetaName { name: String, content: String },

    /// `<meta property=.. content=..>`.
    MetaProperty { property: String, content: String },

    /// `<link rel=.. href=..>`, with `hreflang` for alternates.
    Link {
        rel: String,
        href: String,
        href_lang: Option<String>,
    },

    /// `<script type="application/ld+json">` holding serialized JSON.
    JsonLd(String),
}

/// The metadata a page declares about itself.
///
/// Every field is optional; absent fields simply produce no tags.
///
/// # Example
///
/// ```
/// use weft::seo::{HeadTag, HeadTags};
/// use weft::Language;
///
/// let head = HeadTags::builder()
///     .title("Work — WHITEWEAVER Studio".to_string())
///     .canonical("/work".to_string())
///     .build();
///
/// let tags = head.tags("https://whiteweaver.com", Language::En);
/// assert_eq!(tags[0], HeadTag::Title("Work — WHITEWEAVER Studio".to_string()));
/// assert!(tags.contains(&HeadTag::Link {
///     rel: "canonical".to_string(),
///     href: "https://whiteweaver.com/work".to_string(),
///     href_lang: None,
/// }));
/// ```
#[derive(Debug, Clone, Default, Builder)]
#[builder(on(String, into))]
pub struct HeadTags {
    pub title: Option<String>,
    pub description: Option<String>,
    /// Absolute URL or a path starting with `/`.
    pub canonical: Option<String>,
    pub image: Option<String>,
    #[builder(default)]
    pub kind: OgType,
    #[builder(default)]
    pub json_ld: Vec<JsonValue>,
    #[builder(default)]
    pub alternates: Vec<Alternate>,
}

impl HeadTags {
    /// Expand into head elements for a page served from `site_url` in
    /// `language`.
    ///
    /// Order: title, description, canonical, Open Graph, Twitter card,
    /// language alternates, JSON-LD payloads.
    pub fn tags(&self, site_url: &str, language: Language) -> Vec<HeadTag> {
        let mut tags = Vec::new();
        let url = self
            .canonical
            .as_deref()
            .map(|canonical| absolute_url(site_url, canonical));
        let image = self.image.as_deref().map(|image| absolute_url(site_url, image));

        if let Some(title) = &self.title {
            tags.push(HeadTag::Title(title.clone()));
        }
        push_name(&mut tags, "description", self.description.as_deref());
        if let Some(url) = &url {
            tags.push(HeadTag::Link {
                rel: "canonical".to_string(),
                href: url.clone(),
                href_lang: None,
            });
        }

        push_property(&mut tags, "og:title", self.title.as_deref());
        push_property(&mut tags, "og:description", self.description.as_deref());
        push_property(&mut tags, "og:type", Some(self.kind.as_str()));
        push_property(&mut tags, "og:url", url.as_deref());
        push_property(&mut tags, "og:image", image.as_deref());
        push_property(&mut tags, "og:site_name", Some(SITE_NAME));
        push_property(&mut tags, "og:locale", Some(language.og_locale()));

        let card = if image.is_some() {
            "summary_large_image"
        } else {
            "summary"
        };
        push_name(&mut tags, "twitter:card", Some(card));
        push_name(&mut tags, "twitter:title", self.title.as_deref());
        push_name(&mut tags, "twitter:description", self.description.as_deref());
        push_name(&mut tags, "twitter:image", image.as_deref());

        for alternate in &self.alternates {
            tags.push(HeadTag::Link {
                rel: "alternate".to_string(),
                href: absolute_url(site_url, &alternate.href),
                href_lang: Some(alternate.href_lang.clone()),
            });
        }

        for payload in &self.json_ld {
            tags.push(HeadTag::JsonLd(payload.to_string()));
        }

        tags
    }
}

fn push_name(tags: &mut Vec<HeadTag>, name: &str, content: Option<&str>) {
    if let Some(content) = content.filter(|c| !c.is_empty()) {
        tags.push(HeadTag::MetaName {
            name: name.to_string(),
            content: content.to_string(),
        });
    }
}

fn push_property(tags: &mut Vec<HeadTag>, property: &str, content: Option<&str>) {
    if let Some(content) = content.filter(|c| !c.is_empty()) {
        tags.push(HeadTag::MetaProperty {
            property: property.to_string(),
            content: content.to_string(),
        });
    }
}

/// Resolve `url` against the site origin.
///
/// URLs starting with `http` are returned unchanged.
pub fn absolute_url(site_url: &str, url: &str) -> String {
    if url.starts_with("http") {
        return url.to_string();
    }
    let origin = site_url.trim_end_matches('/');
    if url.starts_with('/') {
        format!("{origin}{url}")
    } else {
        format!("{origin}/{url}")
    }
}
