//! Miette-based error diagnostics for CLI error presentation.
//!
//! Date-format and config-parse failures are rendered with the offending
//! input shown and the problem span labelled.

use std::path::Path;

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::error::{ConfigError, Error};

/// A date argument that could not be parsed.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(sambat::date))]
pub struct DateInputError {
    /// Human-readable error message.
    pub message: String,

    /// The date argument as typed.
    #[source_code]
    pub src: String,

    #[label("here")]
    pub span: SourceSpan,

    #[help]
    pub help: Option<String>,
}

/// A configuration file that failed to parse.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(sambat::config))]
pub struct ConfigParseError {
    pub message: String,

    #[source_code]
    pub src: String,

    #[label("here")]
    pub span: SourceSpan,

    #[help]
    pub help: Option<String>,
}

/// Build a rich diagnostic for errors that point at user input.
///
/// Returns `None` for errors that read fine as a single line.
#[must_use]
pub fn for_error(err: &Error, config_path: &Path) -> Option<miette::Report> {
    match err {
        Error::InvalidDateFormat { input, reason } => {
            let (src, help) = if input.trim().is_empty() {
                (
                    format!("{input:?}"),
                    "Please select both from and to dates (--from and --to)",
                )
            } else {
                (input.clone(), "dates are written YYYY-MM-DD, e.g. 2082-01-01")
            };
            Some(miette::Report::new(DateInputError {
                message: format!("invalid date: {reason}"),
                span: (0, src.len()).into(),
                src,
                help: Some(help.to_string()),
            }))
        }
        Error::Config(ConfigError::Parse(parse)) => {
            let span = parse.span()?;
            let src = std::fs::read_to_string(config_path).ok()?;
            Some(miette::Report::new(ConfigParseError {
                message: parse.message().to_string(),
                src,
                span: (span.start, span.end.saturating_sub(span.start)).into(),
                help: Some(format!("check {}", config_path.display())),
            }))
        }
        _ => None,
    }
}
