//! Implementation of the `weft resolve` command.

use clap::Args;
use miette::{IntoDiagnostic, Result};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use weft::{Language, LocaleNode};

use super::{load_catalog, localizer, parse_language};
use crate::Context;

/// Arguments for the resolve command.
#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Dot-delimited key path (e.g., nav.work)
    pub key: String,

    /// Language to resolve in (en, sl). Defaults to the stored preference.
    #[arg(long, value_parser = parse_language)]
    pub lang: Option<Language>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for a resolution.
#[derive(Debug, Serialize)]
struct ResolveJson<'a> {
    key: &'a str,
    language: Language,
    /// `null` on a miss.
    shape: Option<String>,
    value: Option<LocaleNode>,
}

/// Run the resolve command.
pub fn run_resolve(args: ResolveArgs, context: &Context) -> Result<i32> {
    let catalog = load_catalog(context)?;
    let localizer = localizer(&catalog, context, args.lang);
    let resolved = localizer.resolve(&args.key);

    if args.json {
        let output = ResolveJson {
            key: &args.key,
            language: localizer.active_locale(),
            shape: resolved.shape().map(|shape| shape.to_string()),
            value: resolved.to_node(),
        };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else if let Some(text) = resolved.as_text() {
        println!("{}", text);
    } else if let Some(node) = resolved.to_node() {
        println!("{}", serde_json::to_string_pretty(&node).into_diagnostic()?);
    } else {
        println!("{}", args.key);
        eprintln!(
            "{} '{}' is not defined in {}",
            "miss:".if_supports_color(Stream::Stderr, |text| text.yellow()),
            args.key,
            localizer.active_locale()
        );
    }

    if resolved.is_miss() {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
