//! Miette-based error diagnostics for CLI error presentation.
//!
//! Maps crate errors to diagnostics with a code and a help suggestion. Parse
//! errors in the configuration file are rendered with the offending snippet.

use std::path::Path;

use miette::{Diagnostic, NamedSource, Report, SourceSpan};
use thiserror::Error;

use crate::domain::DomainError;
use crate::error::{ConfigError, Error};

/// Configuration error with source location context.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(insurance_check::config))]
pub struct ConfigSourceError {
    /// Human-readable error message.
    pub message: String,

    /// Configuration file content.
    #[source_code]
    pub src: NamedSource<String>,

    /// Byte offset and length of the problematic region.
    #[label("here")]
    pub span: SourceSpan,

    /// Optional help text.
    #[help]
    pub help: Option<String>,
}

/// Configuration error without a usable source location.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(insurance_check::config))]
pub struct ConfigFileError {
    pub message: String,
    #[help]
    pub help: Option<String>,
}

/// Ruin: a scenario leaves no positive wealth.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(
    code(insurance_check::ruin),
    help("lower the payout or monthly costs, or raise current wealth")
)]
pub struct RuinError {
    pub message: String,
}

/// An input is outside its range or has no certainty equivalent.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(insurance_check::input))]
pub struct InputError {
    pub message: String,
    #[help]
    pub help: Option<String>,
}

/// Anything else (I/O, prompts, serialization).
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(insurance_check::runtime))]
pub struct RuntimeError {
    pub message: String,
}

/// Build a diagnostic for a domain error.
#[must_use]
pub fn domain_report(err: &DomainError) -> Report {
    let message = err.to_string();
    match err {
        DomainError::NonPositiveWealth { .. } => Report::new(RuinError { message }),
        DomainError::InvalidInput { field, .. } => Report::new(InputError {
            message,
            help: Some(input_help(field).to_string()),
        }),
        DomainError::UndefinedCertaintyEquivalent { .. } => Report::new(InputError {
            message,
            help: Some("try a different risk aversion".to_string()),
        }),
    }
}

fn input_help(field: &str) -> &'static str {
    match field {
        "current_wealth" => "--wealth must be greater than 0",
        "risk_aversion" => "--risk-aversion accepts values from 0 to 10",
        "monthly_costs" => "--monthly-costs must be 0 or more",
        "payout" => "--payout must be 0 or more",
        "probability_per_month" => "--probability accepts values from 0 to 1",
        _ => "check the input values",
    }
}

/// Build a diagnostic for any crate error.
///
/// `config_path` is the file the configuration was loaded from, used to show
/// the failing snippet of a parse error.
#[must_use]
pub fn report(err: &Error, config_path: &Path) -> Report {
    match err {
        Error::Domain(domain) => domain_report(domain),
        Error::Config(ConfigError::Parse(parse)) => {
            let source = std::fs::read_to_string(config_path).ok();
            match (parse.span(), source) {
                (Some(span), Some(source)) => Report::new(ConfigSourceError {
                    message: format!("failed to parse config: {}", parse.message()),
                    src: NamedSource::new(config_path.display().to_string(), source),
                    span: (span.start, span.end.saturating_sub(span.start)).into(),
                    help: Some("see `insurance-check config init` for a template".to_string()),
                }),
                _ => Report::new(ConfigFileError {
                    message: err.to_string(),
                    help: None,
                }),
            }
        }
        Error::Config(ConfigError::ReadFile(_)) => Report::new(ConfigFileError {
            message: format!("{err} ({})", config_path.display()),
            help: Some("create one with `insurance-check config init`".to_string()),
        }),
        Error::Config(ConfigError::Input(_)) => Report::new(ConfigFileError {
            message: err.to_string(),
            help: Some(format!(
                "fix the [inputs] table in {}",
                config_path.display()
            )),
        }),
        Error::Config(ConfigError::InvalidValue { .. }) => Report::new(ConfigFileError {
            message: err.to_string(),
            help: None,
        }),
        Error::Json(_) | Error::Io(_) | Error::Prompt(_) => Report::new(RuntimeError {
            message: err.to_string(),
        }),
    }
}
