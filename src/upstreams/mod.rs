//! Upstream aggregation.
//!
//! # Data Flow
//! ```text
//! StatusDocument.servers.server + tracked upstream names
//!     → aggregator.rs (single pass, up/down per upstream)
//!     → Metric per upstream (percent down) or AggregationError
//! ```
//!
//! # Design Decisions
//! - Pure function of its inputs, no state across runs
//! - Output sorted by upstream name for deterministic reports
//! - An upstream with zero records is an error value, not a panic

pub mod aggregator;

pub use aggregator::{aggregate, Aggregation, AggregationError, Metric, UpstreamTally};
