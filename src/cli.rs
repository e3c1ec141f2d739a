//! Command-line surface.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::{load_config, validate_config, CheckConfig, ConfigError};
use crate::report::Range;

#[derive(Debug, Parser)]
#[command(name = "check_nginx_upstreams", version)]
#[command(about = "Check nginx upstreams via nginx_upstream_check_module", long_about = None)]
pub struct Cli {
    /// URL to check (output must be json-formatted)
    #[arg(short, long, required_unless_present = "config")]
    pub url: Option<String>,

    /// Critical threshold for DOWN servers in percent [default: 49]
    #[arg(short, long, value_name = "RANGE", allow_hyphen_values = true)]
    pub critical: Option<String>,

    /// Warning threshold for DOWN servers in percent [default: 25]
    #[arg(short, long, value_name = "RANGE", allow_hyphen_values = true)]
    pub warning: Option<String>,

    /// Increase output verbosity (use up to 3 times)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Abort the whole check after this many seconds [default: 60]
    #[arg(short, long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Connect directly, ignoring proxy environment variables
    #[arg(long)]
    pub no_proxy: bool,

    /// Only report on this upstream (repeatable)
    #[arg(long = "upstream", value_name = "NAME")]
    pub upstreams: Vec<String>,

    /// TOML file with defaults and per-upstream thresholds
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// First paragraph of a clap error on one line, without the `error:` tag.
fn usage_summary(err: &clap::Error) -> String {
    let text = err.to_string();
    let summary = text
        .lines()
        .take_while(|line| !line.trim().is_empty())
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(" ");
    summary
        .strip_prefix("error: ")
        .unwrap_or(&summary)
        .to_string()
}

fn parse_threshold(flag: &'static str, value: Option<String>) -> Result<Option<Range>, ConfigError> {
    value
        .map(|raw| {
            raw.parse::<Range>()
                .map_err(|source| ConfigError::Threshold { flag, source })
        })
        .transpose()
}

impl Cli {
    /// Parse process arguments. `--help` and `--version` print and exit;
    /// every other argument error is returned so it can be reported as
    /// UNKNOWN instead of clap's exit code 2.
    pub fn parse_args() -> Result<Self, ConfigError> {
        Self::parse_args_from(std::env::args_os())
    }

    pub fn parse_args_from<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Self::try_parse_from(args) {
            Ok(cli) => Ok(cli),
            Err(e) if !e.use_stderr() => e.exit(),
            Err(e) => Err(ConfigError::Usage(usage_summary(&e))),
        }
    }

    /// Merge flags over the optional config file and validate the result.
    pub fn into_config(self) -> Result<CheckConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => CheckConfig::default(),
        };

        if let Some(url) = self.url {
            config.url = Some(url);
        }
        if let Some(warning) = parse_threshold("warning", self.warning)? {
            config.warning = Some(warning);
        }
        if let Some(critical) = parse_threshold("critical", self.critical)? {
            config.critical = Some(critical);
        }
        if self.verbose > 0 {
            config.verbose = self.verbose;
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        if self.no_proxy {
            config.no_proxy = true;
        }
        if !self.upstreams.is_empty() {
            config.track = self.upstreams;
        }

        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}
