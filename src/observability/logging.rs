//! Structured logging.
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Logs go to stderr; stdout is reserved for plugin output
//! - Level follows `--verbose` unless `RUST_LOG` is set

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter directive for a verbosity level.
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "check_nginx_upstreams=warn",
        1 => "check_nginx_upstreams=info",
        2 => "check_nginx_upstreams=debug",
        _ => "check_nginx_upstreams=trace,reqwest=debug",
    }
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_directive(verbose).into());

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .try_init();
}
