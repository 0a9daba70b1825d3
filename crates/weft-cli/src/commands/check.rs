//! Implementation of the `weft check` command.

use std::fs::read_to_string;
use std::path::PathBuf;

use clap::Args;
use miette::{IntoDiagnostic, Result};
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use weft::catalog::parse_table;
use weft::{validate_parity, Language, LoadError};

use super::load_catalog;
use crate::output::load_report;
use crate::Context;

/// Arguments for the check command.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Individual locale files to check for syntax only (.json)
    pub files: Vec<PathBuf>,

    /// Output parity warnings as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit with non-zero code if the tables are not in parity
    #[arg(long)]
    pub strict: bool,
}

/// JSON output for one parity warning.
#[derive(Debug, Serialize)]
struct WarningJson {
    key: String,
    message: String,
}

/// Run the check command.
///
/// With files, each is parsed on its own. Without, the catalog is loaded
/// and the Slovenian table is compared against the English one.
pub fn run_check(args: CheckArgs, context: &Context) -> Result<i32> {
    if !args.files.is_empty() {
        return check_files(&args.files);
    }

    let catalog = match load_catalog(context) {
        Ok(catalog) => catalog,
        Err(report) => {
            eprintln!("{:?}", report);
            return Ok(exitcode::DATAERR);
        }
    };
    let warnings = validate_parity(&catalog, Language::En, Language::Sl);

    if args.json {
        let json: Vec<WarningJson> = warnings
            .iter()
            .map(|warning| WarningJson {
                key: warning.key().to_string(),
                message: warning.to_string(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&json).into_diagnostic()?);
    } else if warnings.is_empty() {
        println!(
            "{} locale tables are in parity",
            "ok:".if_supports_color(Stream::Stdout, |text| text.green())
        );
    } else {
        for warning in &warnings {
            println!(
                "{} {}",
                "warning:".if_supports_color(Stream::Stdout, |text| text.yellow()),
                warning
            );
        }
    }

    if args.strict && !warnings.is_empty() {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

fn check_files(files: &[PathBuf]) -> Result<i32> {
    let mut code = exitcode::OK;
    for path in files {
        let outcome = read_to_string(path)
            .map_err(|e| LoadError::Io {
                path: path.clone(),
                source: e,
            })
            .and_then(|content| parse_table(&content, path));
        match outcome {
            Ok(_) => println!(
                "{} {}",
                "ok:".if_supports_color(Stream::Stdout, |text| text.green()),
                path.display()
            ),
            Err(err) => {
                eprintln!("{:?}", load_report(err));
                code = exitcode::DATAERR;
            }
        }
    }
    Ok(code)
}
