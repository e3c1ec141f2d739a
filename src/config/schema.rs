//! Configuration schema definitions.
//!
//! All types derive Serde traits so the same structure can be read from an
//! optional TOML file and then overlaid with command-line flags.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::report::Range;

/// Root configuration for one check run.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CheckConfig {
    /// URL of the JSON status endpoint.
    pub url: Option<String>,

    /// Default warning range, percent of servers down.
    pub warning: Option<Range>,

    /// Default critical range, percent of servers down.
    pub critical: Option<Range>,

    /// Output verbosity (0-3).
    pub verbose: u8,

    /// Wall-clock limit for the whole check in seconds.
    pub timeout_secs: u64,

    /// Ignore HTTP(S)_PROXY environment variables.
    pub no_proxy: bool,

    /// Upstreams to report on. Empty means every upstream in the document.
    pub track: Vec<String>,

    /// Per-upstream threshold overrides.
    pub upstreams: BTreeMap<String, ThresholdPair>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            url: None,
            warning: Some(Range::up_to(25.0)),
            critical: Some(Range::up_to(49.0)),
            verbose: 0,
            timeout_secs: 60,
            no_proxy: false,
            track: Vec::new(),
            upstreams: BTreeMap::new(),
        }
    }
}

/// Warning/critical ranges for one upstream. Unset fields inherit the
/// defaults from [`CheckConfig`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
pub struct ThresholdPair {
    #[serde(default)]
    pub warning: Option<Range>,

    #[serde(default)]
    pub critical: Option<Range>,
}

impl CheckConfig {
    /// Effective thresholds for `upstream`.
    pub fn thresholds_for(&self, upstream: &str) -> ThresholdPair {
        let overrides = self.upstreams.get(upstream).copied().unwrap_or_default();
        ThresholdPair {
            warning: overrides.warning.or(self.warning),
            critical: overrides.critical.or(self.critical),
        }
    }
}
