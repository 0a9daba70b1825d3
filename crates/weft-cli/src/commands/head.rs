//! Implementation of the `weft head` command.

use clap::Args;
use miette::Result;
use owo_colors::{OwoColorize, Stream};
use weft::seo::render_head;
use weft::site::{page_head, Route, DEFAULT_SITE_URL};
use weft::Language;

use super::{load_catalog, localizer, parse_language};
use crate::Context;

/// Arguments for the head command.
#[derive(Debug, Args)]
pub struct HeadArgs {
    /// Page path (e.g., /work/voltsure)
    pub path: String,

    /// Language to render in (en, sl). Defaults to the stored preference.
    #[arg(long, value_parser = parse_language)]
    pub lang: Option<Language>,

    /// Public origin used for absolute URLs
    #[arg(long, env = "SITE_URL", default_value = DEFAULT_SITE_URL)]
    pub site_url: String,
}

/// Run the head command.
pub fn run_head(args: HeadArgs, context: &Context) -> Result<i32> {
    let Some(route) = Route::parse(&args.path) else {
        eprintln!(
            "{} no page at '{}'",
            "error:".if_supports_color(Stream::Stderr, |text| text.red()),
            args.path
        );
        return Ok(exitcode::USAGE);
    };

    let catalog = load_catalog(context)?;
    let localizer = localizer(&catalog, context, args.lang);
    let Some(head) = page_head(&route, &localizer, &args.site_url) else {
        eprintln!(
            "{} '{}' is not in the portfolio",
            "error:".if_supports_color(Stream::Stderr, |text| text.red()),
            route
        );
        return Ok(exitcode::DATAERR);
    };

    let tags = head.tags(&args.site_url, localizer.active_locale());
    println!("{}", render_head(&tags));
    Ok(exitcode::OK)
}
