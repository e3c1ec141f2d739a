//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! fetcher, aggregator, check
//!     → logging.rs (structured log events on stderr)
//! ```

pub mod logging;
