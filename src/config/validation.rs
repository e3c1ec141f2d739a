//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde and range parsing handle syntax)
//! - URL must be present and http/https
//! - Timeout and verbosity within bounds
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Pure function: &CheckConfig → Result<(), Vec<ValidationError>>

use thiserror::Error;
use url::Url;

use crate::config::schema::CheckConfig;

/// Highest meaningful `--verbose` count.
pub const MAX_VERBOSITY: u8 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("status URL is required")]
    MissingUrl,

    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("unsupported URL scheme '{0}', expected http or https")]
    UnsupportedScheme(String),

    #[error("timeout must be greater than zero")]
    ZeroTimeout,

    #[error("verbosity {0} exceeds maximum of {max}", max = MAX_VERBOSITY)]
    VerbosityTooHigh(u8),

    #[error("threshold override for '{0}' has an empty upstream name")]
    EmptyUpstreamName(String),
}

/// Parse the configured URL, enforcing http/https.
pub fn parse_url(config: &CheckConfig) -> Result<Url, ValidationError> {
    let raw = config.url.as_deref().ok_or(ValidationError::MissingUrl)?;
    let url = Url::parse(raw).map_err(|e| ValidationError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ValidationError::UnsupportedScheme(other.to_string())),
    }
}

pub fn validate_config(config: &CheckConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = parse_url(config) {
        errors.push(e);
    }

    if config.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if config.verbose > MAX_VERBOSITY {
        errors.push(ValidationError::VerbosityTooHigh(config.verbose));
    }

    for name in config.upstreams.keys().chain(config.track.iter()) {
        if name.trim().is_empty() {
            errors.push(ValidationError::EmptyUpstreamName(name.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
