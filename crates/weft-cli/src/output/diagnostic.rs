//! Miette diagnostics for locale file errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use std::fs::read_to_string;
use std::path::Path;

use miette::{miette, Diagnostic, NamedSource, Report, SourceSpan};
use thiserror::Error;
use weft::LoadError;

/// A locale file syntax error pointing into the file.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("invalid locale table: {message}")]
#[diagnostic(code(weft::syntax))]
pub struct WeftDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl WeftDiagnostic {
    /// Point at `line`:`column` (both 1-based) of `content`.
    pub fn new(path: &Path, content: &str, line: usize, column: usize, message: &str) -> Self {
        let offset = byte_offset(content, line, column);
        let help = message
            .starts_with("locale values")
            .then(|| "numbers, booleans and null are not allowed; quote the value".to_string());

        WeftDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, 1).into(),
            message: message.to_string(),
            help,
        }
    }
}

/// Turn a load failure into a report, with source context when the file can
/// be read back.
pub fn load_report(err: LoadError) -> Report {
    if let LoadError::Parse {
        path,
        line,
        column,
        message,
    } = &err
    {
        if let Ok(content) = read_to_string(path) {
            return WeftDiagnostic::new(path, &content, *line, *column, message).into();
        }
    }
    miette!("{}", err)
}

/// Sum of (line_length + 1) for lines before `line`, plus the column,
/// clamped to the content length.
fn byte_offset(content: &str, line: usize, column: usize) -> usize {
    let offset = content
        .lines()
        .take(line.saturating_sub(1))
        .map(|l| l.len() + 1)
        .sum::<usize>()
        + column.saturating_sub(1);
    offset.min(content.len())
}
