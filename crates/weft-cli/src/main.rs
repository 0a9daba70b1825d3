//! weft CLI entry point.
//!
//! Command-line tools for the site's locale tables:
//! - `weft resolve` - Look up a key path in one language
//! - `weft coverage` - Report translation coverage
//! - `weft check` - Validate locale files and their parity
//! - `weft head` - Render the head tags of a page
//! - `weft sitemap` - Write sitemap.xml, robots.txt and 404.html
//! - `weft prefs` - Inspect or change stored preferences

mod commands;
mod output;

use std::io::stderr;
use std::path::PathBuf;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_check, run_coverage, run_head, run_prefs, run_resolve, run_sitemap, CheckArgs,
    CoverageArgs, HeadArgs, PrefsArgs, ResolveArgs, SitemapArgs,
};
use tracing_subscriber::EnvFilter;

/// Locale table tools for the WHITEWEAVER Studio site.
#[derive(Debug, Parser)]
#[command(name = "weft")]
#[command(about = "Locale table tools for the WHITEWEAVER Studio site", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding en.json and sl.json; the bundled tables otherwise
    #[arg(long, env = "WEFT_LOCALES", global = true)]
    pub locales: Option<PathBuf>,

    /// Preferences file used when no language is given
    #[arg(
        long,
        env = "WEFT_PREFS",
        default_value = ".weft-preferences.json",
        global = true
    )]
    pub prefs: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve a key path
    Resolve(ResolveArgs),
    /// Report translation coverage against a source language
    Coverage(CoverageArgs),
    /// Validate locale files and report parity warnings
    Check(CheckArgs),
    /// Render the head tags of a page
    Head(HeadArgs),
    /// Generate crawler files into a build directory
    Sitemap(SitemapArgs),
    /// Show or change stored preferences
    Prefs(PrefsArgs),
}

/// Options shared by every command.
#[derive(Debug, Clone)]
pub struct Context {
    pub locales: Option<PathBuf>,
    pub prefs: PathBuf,
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors checks TTY, NO_COLOR and FORCE_COLOR itself
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Log to stderr, honoring `RUST_LOG` when set.
fn setup_tracing(verbose: bool) {
    let default = if verbose { "weft=debug,info" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(stderr)
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_tracing(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let context = Context {
        locales: cli.locales,
        prefs: cli.prefs,
    };
    let result = match cli.command {
        Commands::Resolve(args) => run_resolve(args, &context),
        Commands::Coverage(args) => run_coverage(args, &context),
        Commands::Check(args) => run_check(args, &context),
        Commands::Head(args) => run_head(args, &context),
        Commands::Sitemap(args) => run_sitemap(args),
        Commands::Prefs(args) => run_prefs(args, &context),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
