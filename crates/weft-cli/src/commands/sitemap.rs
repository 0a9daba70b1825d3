//! Implementation of the `weft sitemap` command.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::Args;
use miette::{IntoDiagnostic, Result};
use weft::site::{write_site_files, Sitemap, DEFAULT_SITE_URL};

/// Arguments for the sitemap command.
#[derive(Debug, Args)]
pub struct SitemapArgs {
    /// Build output directory
    #[arg(long, default_value = "dist")]
    pub dist: PathBuf,

    /// Public origin the URLs are listed under
    #[arg(long, env = "SITE_URL", default_value = DEFAULT_SITE_URL)]
    pub site_url: String,

    /// Last-modified timestamp (RFC 3339). Defaults to now.
    #[arg(long)]
    pub lastmod: Option<DateTime<Utc>>,
}

/// Run the sitemap command.
pub fn run_sitemap(args: SitemapArgs) -> Result<i32> {
    let sitemap = Sitemap::builder()
        .site_url(args.site_url)
        .lastmod(args.lastmod.unwrap_or_else(Utc::now))
        .build();

    let files = write_site_files(&args.dist, &sitemap).into_diagnostic()?;
    println!("{}", files.sitemap.display());
    println!("{}", files.robots.display());
    if let Some(not_found) = &files.not_found {
        println!("{}", not_found.display());
    }
    Ok(exitcode::OK)
}
