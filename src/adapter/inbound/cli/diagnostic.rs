//! Miette-based error diagnostics for CLI error presentation.
//!
//! Every command error is turned into a [`miette::Report`] here, with a
//! help line telling the user what to change.

use std::path::Path;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::domain::error::DomainError;
use crate::error::{ConfigError, Error};

/// Configuration file error with source location context.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(courtedge::config::parse))]
pub struct ConfigSourceError {
    pub message: String,

    #[source_code]
    pub src: NamedSource<String>,

    #[label("here")]
    pub span: SourceSpan,

    #[help]
    pub help: Option<String>,
}

impl ConfigSourceError {
    #[must_use]
    pub fn new(
        message: impl Into<String>,
        src: NamedSource<String>,
        offset: usize,
        len: usize,
    ) -> Self {
        Self {
            message: message.into(),
            src,
            span: (offset, len).into(),
            help: None,
        }
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Configuration error without a usable source location.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(courtedge::config))]
pub struct ConfigIssue {
    pub message: String,

    #[help]
    pub help: Option<String>,
}

/// Rejected calculator input.
///
/// Reports odds, probabilities, or stake parameters that failed validation.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(courtedge::input))]
pub struct InputError {
    pub message: String,

    #[help]
    pub help: Option<String>,
}

impl InputError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            help: None,
        }
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Team lookup or team source error.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(courtedge::teams), help("run `courtedge teams` to see known names"))]
pub struct TeamError {
    pub message: String,
}

/// Build a user-facing report for a command error.
///
/// `config_path` is the file that was (or would have been) loaded, used to
/// point at the offending line of a malformed config.
#[must_use]
pub fn diagnose(err: Error, config_path: &Path) -> miette::Report {
    let message = err.to_string();
    match err {
        Error::Domain(domain) => InputError::new(message)
            .with_help(domain_help(&domain))
            .into(),
        Error::Config(ConfigError::Parse(parse)) => {
            let located = parse.span().and_then(|span| {
                let content = std::fs::read_to_string(config_path).ok()?;
                Some((span, content))
            });
            match located {
                Some((span, content)) => {
                    let src = NamedSource::new(config_path.display().to_string(), content);
                    ConfigSourceError::new(
                        format!("failed to parse config: {}", parse.message()),
                        src,
                        span.start,
                        span.end.saturating_sub(span.start),
                    )
                    .with_help("compare with the template from `courtedge config init`")
                    .into()
                }
                None => ConfigIssue {
                    message,
                    help: Some("compare with the template from `courtedge config init`".into()),
                }
                .into(),
            }
        }
        Error::Config(ConfigError::ReadFile(_)) => ConfigIssue {
            message: format!("{message} ({})", config_path.display()),
            help: Some("create one with `courtedge config init`, or drop --config".into()),
        }
        .into(),
        Error::Config(_) => ConfigIssue {
            message,
            help: Some("run `courtedge config show` to see the defaults".into()),
        }
        .into(),
        Error::UnknownTeam(_) | Error::TeamSource { .. } => TeamError { message }.into(),
        Error::Prompt(_) => InputError::new(message)
            .with_help("the dashboard needs an interactive terminal")
            .into(),
        Error::Json(_) | Error::Csv(_) | Error::Io(_) => miette::miette!("{message}"),
    }
}

fn domain_help(err: &DomainError) -> &'static str {
    match err {
        DomainError::InvalidOdds { .. } => {
            "decimal odds pay out per unit staked and must be greater than 1.0, e.g. 1.53"
        }
        DomainError::DegenerateMarket { .. } => "check that both quotes are decimal odds",
        DomainError::InvalidBankroll { .. } => "pass --bankroll with an amount of 0 or more",
        DomainError::InvalidKellyFraction { .. } => {
            "use 1.0 for full Kelly or a fraction such as 0.5 for half Kelly"
        }
        DomainError::InvalidEdgeThreshold { .. } => {
            "set [model] edge_threshold between 0 and 1, e.g. 0.05"
        }
        DomainError::InvalidProbability { .. } => {
            "--model-home-prob takes a probability strictly between 0 and 1, e.g. 0.62"
        }
    }
}
