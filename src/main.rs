//! check_nginx_upstreams
//!
//! ```text
//!   -u URL ──▶ status fetcher ──▶ upstream aggregator ──▶ threshold contexts
//!                 (HTTP GET)        (percent down)          (warning/critical)
//!                                                                  │
//!   exit code ◀── nagiosplugin (status line + perfdata) ◀──────────┘
//! ```
//!
//! Exit codes: 0 OK, 1 WARNING, 2 CRITICAL, 3 UNKNOWN.

use nagiosplugin::{safe_run, ServiceState};

use check_nginx_upstreams::check::{self, CheckError};
use check_nginx_upstreams::cli::Cli;
use check_nginx_upstreams::observability::logging;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = Cli::parse_args().and_then(Cli::into_config);
    logging::init(config.as_ref().map(|c| c.verbose).unwrap_or_default());

    let result = match config {
        Ok(config) => {
            tracing::debug!(
                url = config.url.as_deref().unwrap_or_default(),
                timeout_secs = config.timeout_secs,
                tracked = config.track.len(),
                "Configuration loaded"
            );
            check::run(&config).await
        }
        Err(e) => Err(CheckError::from(e)),
    };

    safe_run(|| result, ServiceState::Unknown).print_and_exit()
}
