//! Implementation of the `weft prefs` command.

use clap::{Args, Subcommand};
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use weft::{FileStore, Language, Localizer};

use super::{load_catalog, parse_language};
use crate::Context;

/// Arguments for the prefs command.
#[derive(Debug, Args)]
pub struct PrefsArgs {
    #[command(subcommand)]
    pub action: Option<PrefsAction>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// What to do with the stored preferences.
#[derive(Debug, Clone, Subcommand)]
pub enum PrefsAction {
    /// Print the stored preferences (the default)
    Show,
    /// Store a language
    SetLanguage {
        /// Language code (en, sl)
        #[arg(value_parser = parse_language)]
        language: Language,
    },
    /// Switch between English and Slovenian
    ToggleLanguage,
    /// Flip the color-invert toggle
    ToggleInvert,
}

/// JSON output for the preferences.
#[derive(Debug, Serialize)]
struct PrefsJson {
    language: Language,
    invert_colors: bool,
}

/// Run the prefs command.
pub fn run_prefs(args: PrefsArgs, context: &Context) -> Result<i32> {
    let catalog = load_catalog(context)?;
    let mut localizer = Localizer::new(&catalog, FileStore::open(&context.prefs));

    match args.action.unwrap_or(PrefsAction::Show) {
        PrefsAction::Show => {}
        PrefsAction::SetLanguage { language } => localizer.set_active_locale(language),
        PrefsAction::ToggleLanguage => {
            localizer.toggle_language();
        }
        PrefsAction::ToggleInvert => {
            localizer.toggle_invert_colors();
        }
    }

    let prefs = PrefsJson {
        language: localizer.active_locale(),
        invert_colors: localizer.invert_colors(),
    };
    if args.json {
        println!("{}", serde_json::to_string_pretty(&prefs).into_diagnostic()?);
    } else {
        println!("language: {}", prefs.language);
        println!("invert-colors: {}", if prefs.invert_colors { "on" } else { "off" });
        println!("file: {}", localizer.store().path().display());
    }
    Ok(exitcode::OK)
}
