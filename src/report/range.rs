//! Nagios threshold range notation.
//!
//! # Syntax
//! ```text
//! 10      alert if value < 0 or value > 10
//! 10:     alert if value < 10
//! ~:10    alert if value > 10
//! 10:20   alert if value < 10 or value > 20
//! @10:20  alert if 10 <= value <= 20
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while parsing a range specification.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RangeParseError {
    #[error("empty range specification")]
    Empty,

    #[error("invalid range bound '{bound}' in '{spec}'")]
    InvalidBound { spec: String, bound: String },

    #[error("range start {start} is greater than end {end} in '{spec}'")]
    Inverted { spec: String, start: f64, end: f64 },
}

/// A closed numeric interval with an optional inversion flag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Range {
    pub start: f64,
    pub end: f64,
    /// Alert when the value lies inside the interval instead of outside.
    pub invert: bool,
}

impl Range {
    /// Range `0:end`, the meaning of a plain number.
    pub fn up_to(end: f64) -> Self {
        Self {
            start: 0.0,
            end,
            invert: false,
        }
    }

    /// True if `value` lies within `start..=end`, ignoring inversion.
    pub fn contains(&self, value: f64) -> bool {
        self.start <= value && value <= self.end
    }

    /// True if `value` should raise an alert against this range.
    pub fn is_violated(&self, value: f64) -> bool {
        self.contains(value) == self.invert
    }

    /// Single-value threshold for performance data.
    ///
    /// Only plain upper bounds (`N`, `~:N`) have one; other forms are left
    /// empty in perfdata.
    pub fn perf_threshold(&self) -> Option<f64> {
        let upper_only = !self.invert && self.start <= 0.0 && self.end.is_finite();
        upper_only.then_some(self.end)
    }

    /// Describe a violation, or `None` if the value is acceptable.
    pub fn violation(&self, value: f64) -> Option<String> {
        if !self.is_violated(value) {
            return None;
        }
        if self.invert {
            Some(format!("inside range {}", self))
        } else {
            Some(format!("outside range {}", self))
        }
    }
}

fn parse_bound(spec: &str, bound: &str) -> Result<f64, RangeParseError> {
    bound
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| RangeParseError::InvalidBound {
            spec: spec.to_string(),
            bound: bound.to_string(),
        })
}

impl FromStr for Range {
    type Err = RangeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let spec = s.trim();
        if spec.is_empty() {
            return Err(RangeParseError::Empty);
        }

        let (invert, body) = match spec.strip_prefix('@') {
            Some(rest) => (true, rest),
            None => (false, spec),
        };

        let (start, end) = match body.split_once(':') {
            Some((start, end)) => {
                let start = match start.trim() {
                    "~" => f64::NEG_INFINITY,
                    "" => 0.0,
                    other => parse_bound(spec, other)?,
                };
                let end = match end.trim() {
                    "" => f64::INFINITY,
                    other => parse_bound(spec, other)?,
                };
                (start, end)
            }
            None => (0.0, parse_bound(spec, body)?),
        };

        if start > end {
            return Err(RangeParseError::Inverted {
                spec: spec.to_string(),
                start,
                end,
            });
        }

        Ok(Self { start, end, invert })
    }
}

impl TryFrom<String> for Range {
    type Error = RangeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Range> for String {
    fn from(range: Range) -> Self {
        range.to_string()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.invert {
            f.write_str("@")?;
        }
        if self.start == f64::NEG_INFINITY {
            f.write_str("~:")?;
        } else if self.start != 0.0 || self.end == f64::INFINITY {
            write!(f, "{}:", self.start)?;
        }
        if self.end != f64::INFINITY {
            write!(f, "{}", self.end)?;
        }
        Ok(())
    }
}
