//! Threshold evaluation and plugin output.
//!
//! # Data Flow
//! ```text
//! Metric (name, value)
//!     → context.rs (warning/critical ranges → UpstreamResult)
//!     → resource.rs (description, long output, nagiosplugin::Resource)
//!     → nagiosplugin (state roll-up, perfdata, stdout + exit code)
//! ```
//!
//! # Design Decisions
//! - Thresholds use Nagios range notation (range.rs)
//! - Critical is checked before warning
//! - A metric that cannot be computed becomes UNKNOWN, never a panic

pub mod context;
pub mod range;
pub mod resource;

pub use context::{UpstreamContext, UpstreamResult};
pub use range::{Range, RangeParseError};
pub use resource::build_resource;
