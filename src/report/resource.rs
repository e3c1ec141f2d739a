//! Assemble upstream results into one plugin resource.
//!
//! # Format
//! ```text
//! NGINXUPSTREAMS is CRITICAL: 60 % servers are down in a upstream (outside range 49)| 'a'=60%;25;49;0;100
//! ```
//! With `-v`, long output lines (`CRITICAL: ...`) follow a blank line and the
//! perfdata moves behind them.

use nagiosplugin::{Resource, ServiceState};

use crate::report::context::UpstreamResult;

/// Description used when the document lists no upstream at all.
pub const NO_UPSTREAMS: &str = "no upstreams found";

/// Build the resource for a set of upstream results.
///
/// The description is the first result carrying the worst state. The
/// overall state itself is rolled up by [`Resource::nagios_result`].
pub fn build_resource(check: &str, results: Vec<UpstreamResult>, verbose: u8) -> Resource {
    let Some(worst) = results.iter().map(|r| r.state).max() else {
        return Resource::new(check)
            .with_fixed_state(ServiceState::Unknown)
            .with_description(NO_UPSTREAMS);
    };

    let mut resource = Resource::new(check);
    if let Some(first) = results.iter().find(|r| r.state == worst) {
        resource.set_description(first.summary());
    }
    for result in results {
        resource.push_result(result.into_check_result(verbose));
    }
    resource
}
