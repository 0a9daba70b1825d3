use serde_json::{Value as JsonValue, json};

use super::projects::localized_project;
use super::route::Route;
use crate::localizer::Localizer;
use crate::preferences::PreferenceStore;
use crate::seo::{HeadTags, OgType, SITE_NAME, absolute_url, language_alternates};
use crate::types::Language;

const HOME_IMAGE: &str = "/hero/hero-1.webp";

/// The head metadata each page declares, with copy in the active language.
///
/// `site_url` is the public origin used inside JSON-LD payloads. Returns
/// `None` for a project slug that is not part of the portfolio.
pub fn page_head<S: PreferenceStore>(
    route: &Route,
    localizer: &Localizer<'_, S>,
    site_url: &str,
) -> Option<HeadTags> {
    let language = localizer.active_locale();
    let path = route.path();
    let head = match route {
        Route::Home => {
            let tagline = match language {
                Language::En => "from idea to reality fast",
                Language::Sl => "od ideje do izvedbe hitro",
            };
            let origin = absolute_url(site_url, "/");
            HeadTags::builder()
                .title(format!("{SITE_NAME} — {tagline}"))
                .description(localizer.text("home.services.subtitle").to_string())
                .canonical(path)
                .image(HOME_IMAGE.to_string())
                .json_ld(vec![
                    json!({
                        "@context": "https://schema.org",
                        "@type": "WebSite",
                        "name": SITE_NAME,
                        "url": origin,
                    }),
                    json!({
                        "@context": "https://schema.org",
                        "@type": "Organization",
                        "name": SITE_NAME,
                        "url": origin,
                    }),
                ])
                .build()
        }
        Route::Project(slug) => {
            let localized = localized_project(localizer, slug)?;
            let copy = &localized.copy;
            let published = format!("{}-01-01", localized.project.date);
            HeadTags::builder()
                .title(format!("{} — {}", copy.title, copy.client))
                .description(copy.description.clone())
                .canonical(path)
                .image(localized.project.cover_image.to_string())
                .kind(OgType::Article)
                .json_ld(vec![json!({
                    "@context": "https://schema.org",
                    "@type": "Article",
                    "headline": copy.title,
                    "description": copy.description,
                    "image": localized.project.images,
                    "datePublished": published,
                    "dateModified": published,
                    "author": { "@type": "Organization", "name": SITE_NAME },
                    "publisher": {
                        "@type": "Organization",
                        "name": SITE_NAME,
                        "logo": {
                            "@type": "ImageObject",
                            "url": absolute_url(site_url, "/logo.png"),
                        },
                    },
                })])
                .build()
        }
        Route::Work => section_head(localizer, site_url, "work", "work.title", path, OgType::Website),
        Route::Plans => {
            section_head(localizer, site_url, "plans", "plans.title", path, OgType::Product)
        }
        Route::Contact => {
            section_head(localizer, site_url, "contact", "nav.contact", path, OgType::Website)
        }
        Route::Diy => section_head(localizer, site_url, "diy", "nav.diy", path, OgType::Website),
        Route::About => {
            let nav = localizer.text("nav.about").to_string();
            HeadTags::builder()
                .title(format!("{} — {SITE_NAME}", localizer.text("about.title")))
                .description(localizer.text("about.subtitle").to_string())
                .alternates(language_alternates(&path))
                .json_ld(vec![breadcrumbs(site_url, &nav, &path)])
                .canonical(path)
                .build()
        }
        Route::Services => {
            let (title, location) = match language {
                Language::En => (
                    "Web Development Services, Ecommerce & AI Integration",
                    "Location: Slovenia (Ljubljana).",
                ),
                Language::Sl => (
                    "Storitve razvoja spletnih strani, ecommerce in AI integracija",
                    "Lokacija: Slovenija (Ljubljana).",
                ),
            };
            let nav = localizer.text("nav.services").to_string();
            HeadTags::builder()
                .title(format!("{title} — {SITE_NAME}"))
                .description(format!("{} {location}", localizer.text("services.subtitle")))
                .alternates(language_alternates(&path))
                .json_ld(vec![breadcrumbs(site_url, &nav, &path)])
                .canonical(path)
                .build()
        }
        Route::Privacy => HeadTags::builder()
            .title(format!("Privacy Policy — {SITE_NAME}"))
            .description("Placeholder privacy policy page.".to_string())
            .canonical(path)
            .build(),
        Route::Terms => HeadTags::builder()
            .title(format!("Terms of Service — {SITE_NAME}"))
            .description("Placeholder terms page.".to_string())
            .canonical(path)
            .build(),
    };
    Some(head)
}

/// Head tags for a page whose copy lives under `<section>.title` and
/// `<section>.subtitle`.
fn section_head<S: PreferenceStore>(
    localizer: &Localizer<'_, S>,
    site_url: &str,
    section: &str,
    breadcrumb_key: &str,
    path: String,
    kind: OgType,
) -> HeadTags {
    let title = localizer.text(&format!("{section}.title")).to_string();
    let description = localizer.text(&format!("{section}.subtitle")).to_string();
    let crumb = breadcrumbs(site_url, localizer.text(breadcrumb_key), &path);
    HeadTags::builder()
        .title(format!("{title} — {SITE_NAME}"))
        .description(description)
        .canonical(path)
        .kind(kind)
        .json_ld(vec![crumb])
        .build()
}

/// A two-level Home > page breadcrumb list.
fn breadcrumbs(site_url: &str, name: &str, path: &str) -> JsonValue {
    json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": [
            {
                "@type": "ListItem",
                "position": 1,
                "name": "Home",
                "item": absolute_url(site_url, "/"),
            },
            {
                "@type": "ListItem",
                "position": 2,
                "name": name,
                "item": absolute_url(site_url, path),
            },
        ],
    })
}
