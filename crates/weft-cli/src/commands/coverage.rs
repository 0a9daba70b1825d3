//! Coverage command implementation.

use clap::Args;
use miette::{IntoDiagnostic, Result};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use weft::{coverage, Coverage, Language};

use super::{load_catalog, parse_language};
use crate::output::table::format_coverage_table;
use crate::Context;

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Source language whose keys are expected everywhere.
    #[arg(long, default_value_t = Language::En, value_parser = parse_language)]
    pub source: Language,

    /// Languages to check coverage for (comma-separated). Defaults to every
    /// language other than the source.
    #[arg(long, value_delimiter = ',', value_parser = parse_language)]
    pub lang: Vec<Language>,

    /// Exit with non-zero code if any translation is incomplete.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for coverage data.
#[derive(Debug, Serialize)]
struct CoverageJson {
    language: Language,
    translated: usize,
    total: usize,
    missing: Vec<String>,
}

impl From<Coverage> for CoverageJson {
    fn from(coverage: Coverage) -> Self {
        CoverageJson {
            language: coverage.language,
            translated: coverage.translated,
            total: coverage.total,
            missing: coverage.missing,
        }
    }
}

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs, context: &Context) -> Result<i32> {
    let catalog = load_catalog(context)?;
    let targets: Vec<Language> = if args.lang.is_empty() {
        Language::ALL
            .into_iter()
            .filter(|language| *language != args.source)
            .collect()
    } else {
        args.lang.clone()
    };

    let coverage_data: Vec<Coverage> = targets
        .iter()
        .map(|target| coverage(&catalog, args.source, *target))
        .collect();
    let any_incomplete = coverage_data.iter().any(|c| !c.missing.is_empty());

    if args.json {
        let json_data: Vec<CoverageJson> = coverage_data.into_iter().map(CoverageJson::from).collect();
        println!("{}", serde_json::to_string_pretty(&json_data).into_diagnostic()?);
    } else {
        println!("{}", format_coverage_table(&coverage_data));

        for lang_coverage in &coverage_data {
            if !lang_coverage.missing.is_empty() {
                println!(
                    "\n{}",
                    format!("Missing in {}:", lang_coverage.language)
                        .if_supports_color(Stream::Stdout, |text| text.yellow())
                );
                for key in &lang_coverage.missing {
                    println!("  - {}", key);
                }
            }
        }
    }

    if args.strict && any_incomplete {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
