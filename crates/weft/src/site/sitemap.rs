use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use bon::Builder;
use chrono::{DateTime, SecondsFormat, Utc};
use tracing::{info, warn};

use super::error::SiteError;
use super::projects::PROJECTS;
use super::route::Route;
use crate::types::Language;

/// The public origin used when no other is configured.
pub const DEFAULT_SITE_URL: &str = "https://whiteweaver.com";

/// The crawler sitemap for the site.
///
/// Lists every static page, then every project page, then all of them again
/// in Slovenian via the `lang=sl` query parameter.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use weft::site::Sitemap;
///
/// let sitemap = Sitemap::builder()
///     .site_url("https://example.com/")
///     .slugs(vec!["voltsure".to_string()])
///     .lastmod(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap())
///     .build();
///
/// let urls = sitemap.urls();
/// assert_eq!(urls[0], "https://example.com/");
/// assert!(urls.contains(&"https://example.com/work/voltsure?lang=sl".to_string()));
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct Sitemap {
    site_url: String,
    /// Project slugs; defaults to the whole portfolio.
    #[builder(default = PROJECTS.iter().map(|project| project.slug.to_string()).collect())]
    slugs: Vec<String>,
    lastmod: DateTime<Utc>,
    #[builder(default = "weekly".to_string())]
    change_freq: String,
    #[builder(default = 0.8)]
    priority: f32,
}

impl Sitemap {
    /// The public origin without a trailing slash.
    pub fn origin(&self) -> &str {
        self.site_url.trim_end_matches('/')
    }

    /// Every listed URL, in sitemap order.
    pub fn urls(&self) -> Vec<String> {
        let mut paths: Vec<String> = Route::STATIC.iter().map(Route::path).collect();
        let mut seen = BTreeSet::new();
        for slug in &self.slugs {
            if seen.insert(slug.as_str()) {
                paths.push(Route::Project(slug.clone()).path());
            }
        }

        let translated: Vec<String> = paths
            .iter()
            .map(|path| {
                let separator = if path.contains('?') { '&' } else { '?' };
                format!("{path}{separator}lang={}", Language::Sl.code())
            })
            .collect();

        let origin = self.origin();
        paths
            .iter()
            .chain(&translated)
            .map(|path| format!("{origin}{path}"))
            .collect()
    }

    /// Serialize as a sitemaps.org `urlset` document.
    pub fn to_xml(&self) -> String {
        self.render_xml(&self.urls())
    }

    fn render_xml(&self, urls: &[String]) -> String {
        let lastmod = self.lastmod.to_rfc3339_opts(SecondsFormat::Millis, true);
        let entries: Vec<String> = urls
            .iter()
            .map(|url| {
                format!(
                    "  <url><loc>{}</loc><lastmod>{lastmod}</lastmod><changefreq>{}</changefreq><priority>{}</priority></url>",
                    escape_xml(url),
                    self.change_freq,
                    self.priority
                )
            })
            .collect();
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n{}\n</urlset>",
            entries.join("\n")
        )
    }
}

/// A robots.txt allowing everything and pointing at the sitemap.
pub fn robots_txt(site_url: &str) -> String {
    format!(
        "User-agent: *\nAllow: /\n\nSitemap: {}/sitemap.xml\n",
        site_url.trim_end_matches('/')
    )
}

/// Paths written by [`write_site_files`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteFiles {
    pub sitemap: PathBuf,
    pub robots: PathBuf,
    /// `404.html`, only written when `index.html` exists.
    pub not_found: Option<PathBuf>,
}

/// Write `sitemap.xml` and `robots.txt` into `dist`, and copy `index.html`
/// to `404.html` so static hosts serve the app on deep links.
///
/// `dist` is created if needed. A missing `index.html` skips the 404 page.
pub fn write_site_files(dist: &Path, sitemap: &Sitemap) -> Result<SiteFiles, SiteError> {
    fs::create_dir_all(dist).map_err(|e| io_error(dist, e))?;

    let urls = sitemap.urls();
    let sitemap_path = dist.join("sitemap.xml");
    fs::write(&sitemap_path, sitemap.render_xml(&urls)).map_err(|e| io_error(&sitemap_path, e))?;

    let robots_path = dist.join("robots.txt");
    fs::write(&robots_path, robots_txt(sitemap.origin())).map_err(|e| io_error(&robots_path, e))?;
    info!(dist = %dist.display(), urls = urls.len(), "generated sitemap.xml and robots.txt");

    let index_path = dist.join("index.html");
    let not_found = if index_path.exists() {
        let not_found_path = dist.join("404.html");
        fs::copy(&index_path, &not_found_path).map_err(|e| io_error(&not_found_path, e))?;
        info!(path = %not_found_path.display(), "created 404 fallback page");
        Some(not_found_path)
    } else {
        warn!(path = %index_path.display(), "index.html not found; skipping 404.html");
        None
    };

    Ok(SiteFiles {
        sitemap: sitemap_path,
        robots: robots_path,
        not_found,
    })
}

fn io_error(path: &Path, source: std::io::Error) -> SiteError {
    SiteError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
