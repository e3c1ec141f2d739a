//! One check run: fetch, aggregate, evaluate, build the plugin resource.
//!
//! # Design Decisions
//! - Run-level failures are returned as [`CheckError`] and reported as
//!   UNKNOWN through `nagiosplugin::safe_run`
//! - The whole run is bounded by `timeout_secs`
//! - Tracked upstreams default to the names found in the document

use std::collections::BTreeSet;
use std::time::Duration;

use nagiosplugin::Resource;
use thiserror::Error;
use tokio::time::timeout;

use crate::config::validation::parse_url;
use crate::config::{CheckConfig, ConfigError};
use crate::report::{build_resource, UpstreamContext, UpstreamResult};
use crate::status::{FetchError, StatusDocument, StatusFetcher};
use crate::upstreams::aggregate;

/// Name shown at the start of the status line.
pub const CHECK_NAME: &str = "NGINXUPSTREAMS";

/// Run-level failures. Each one is reported as UNKNOWN.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Timeout: check execution aborted after {0}s")]
    Timeout(u64),
}

/// Run the check with its wall-clock limit.
pub async fn run(config: &CheckConfig) -> Result<Resource, CheckError> {
    let limit = Duration::from_secs(config.timeout_secs);

    let result = match timeout(limit, execute(config)).await {
        Ok(result) => result,
        Err(_) => Err(CheckError::Timeout(config.timeout_secs)),
    };

    match &result {
        Ok(_) => tracing::info!("Check finished"),
        Err(e) => tracing::error!(error = %e, "Check failed"),
    }
    result
}

/// Fetch the status document and evaluate it.
pub async fn execute(config: &CheckConfig) -> Result<Resource, CheckError> {
    let url = parse_url(config).map_err(|e| ConfigError::Validation(vec![e]))?;
    let fetcher = StatusFetcher::new(config.no_proxy)?;
    let document = fetcher.fetch(&url).await?;
    Ok(evaluate(config, &document))
}

/// Aggregate `document` and apply the configured thresholds.
pub fn evaluate(config: &CheckConfig, document: &StatusDocument) -> Resource {
    let tracked: BTreeSet<String> = if config.track.is_empty() {
        document.distinct_upstreams()
    } else {
        config.track.iter().cloned().collect()
    };

    let aggregation = aggregate(document.records(), &tracked);

    let results: Vec<UpstreamResult> = aggregation
        .metrics()
        .into_iter()
        .map(|metric| match metric {
            Ok(metric) => {
                let thresholds = config.thresholds_for(&metric.name);
                let context =
                    UpstreamContext::new(metric.name.clone(), thresholds.warning, thresholds.critical);
                let details = aggregation
                    .tally(&metric.name)
                    .filter(|tally| !tally.down_servers.is_empty())
                    .map(|tally| vec![format!("down: {}", tally.down_servers.join(", "))])
                    .unwrap_or_default();
                context.evaluate(&metric).with_details(details)
            }
            Err(e) => {
                tracing::warn!(upstream = %e.upstream(), "Upstream has no servers");
                UpstreamResult::unknown(e.upstream(), e.to_string())
            }
        })
        .collect();

    build_resource(CHECK_NAME, results, config.verbose)
}
