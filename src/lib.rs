//! Nagios-style check for nginx upstream health.
//!
//! Fetches the JSON status page of nginx_upstream_check_module, computes the
//! percentage of down servers per upstream and reports OK/WARNING/CRITICAL/
//! UNKNOWN against warning and critical thresholds.

pub mod check;
pub mod cli;
pub mod config;
pub mod observability;
pub mod report;
pub mod status;
pub mod upstreams;

pub use check::{CheckError, CHECK_NAME};
pub use config::CheckConfig;
