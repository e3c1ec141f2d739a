//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::CheckConfig;
use crate::config::validation::ValidationError;
use crate::report::RangeParseError;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {}", single_line(&.0.to_string()))]
    Parse(#[from] toml::de::Error),

    #[error("invalid {flag} threshold: {source}")]
    Threshold {
        flag: &'static str,
        #[source]
        source: RangeParseError,
    },

    #[error("invalid arguments: {0}")]
    Usage(String),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Collapse a multi-line diagnostic (location, source snippet, message)
/// into `location: message` so the status line stays on one line.
pub fn single_line(text: &str) -> String {
    let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());
    let first = lines.next().unwrap_or_default();
    match lines.last() {
        Some(last) => format!("{}: {}", first, last),
        None => first.to_string(),
    }
}

/// Parse a TOML configuration document. Validation happens once command
/// line overrides are applied.
pub fn parse_config(content: &str) -> Result<CheckConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<CheckConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let config = parse_config(&content)?;

    tracing::debug!(path = %path.display(), "Configuration file loaded");
    Ok(config)
}
