//! Per-upstream up/down aggregation.
//!
//! A single pass over the server records fills one tally per tracked
//! upstream; each tally then yields the percentage of servers down.

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

use crate::status::ServerRecord;

/// A tracked upstream for which no server records were seen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregationError {
    #[error("no servers reported for upstream '{upstream}'")]
    NoServers { upstream: String },
}

impl AggregationError {
    pub fn upstream(&self) -> &str {
        match self {
            AggregationError::NoServers { upstream } => upstream,
        }
    }
}

/// Percentage of servers down in one upstream.
#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub name: String,
    pub value: f64,
}

/// Up/down counters for one upstream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpstreamTally {
    pub up: u64,
    pub down: u64,
    /// Names of down servers, when the document reports them.
    pub down_servers: Vec<String>,
}

impl UpstreamTally {
    fn record(&mut self, server: &ServerRecord) {
        if server.is_up() {
            self.up += 1;
        } else {
            self.down += 1;
            if let Some(name) = &server.name {
                self.down_servers.push(name.clone());
            }
        }
    }

    pub fn total(&self) -> u64 {
        self.up + self.down
    }

    /// `100 * down / (up + down)`, `None` when no server was counted.
    pub fn percent_down(&self) -> Option<f64> {
        match self.total() {
            0 => None,
            total => Some(100.0 * self.down as f64 / total as f64),
        }
    }
}

/// Tallies for every tracked upstream, keyed and ordered by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregation {
    tallies: BTreeMap<String, UpstreamTally>,
}

impl Aggregation {
    pub fn tally(&self, upstream: &str) -> Option<&UpstreamTally> {
        self.tallies.get(upstream)
    }

    /// One entry per tracked upstream, sorted by name.
    pub fn metrics(&self) -> Vec<Result<Metric, AggregationError>> {
        self.tallies
            .iter()
            .map(|(name, tally)| {
                tally
                    .percent_down()
                    .map(|value| Metric {
                        name: name.clone(),
                        value,
                    })
                    .ok_or_else(|| AggregationError::NoServers {
                        upstream: name.clone(),
                    })
            })
            .collect()
    }
}

/// Count up and down servers for each name in `upstreams`.
///
/// Records whose upstream is not tracked are skipped. Any status other than
/// exactly "up" counts as down.
pub fn aggregate(records: &[ServerRecord], upstreams: &BTreeSet<String>) -> Aggregation {
    let mut tallies: BTreeMap<String, UpstreamTally> = upstreams
        .iter()
        .map(|name| (name.clone(), UpstreamTally::default()))
        .collect();

    for server in records {
        match tallies.get_mut(&server.upstream) {
            Some(tally) => tally.record(server),
            None => {
                tracing::trace!(upstream = %server.upstream, "Skipping untracked upstream");
            }
        }
    }

    for (name, tally) in &tallies {
        tracing::debug!(upstream = %name, up = tally.up, down = tally.down, "Upstream tallied");
    }

    Aggregation { tallies }
}
