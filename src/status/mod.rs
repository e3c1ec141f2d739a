//! Status fetching.
//!
//! # Data Flow
//! ```text
//! url
//!     → fetcher.rs (HTTP GET)
//!     → document.rs (typed JSON schema, rejects malformed bodies)
//!     → StatusDocument handed to the aggregator
//! ```

pub mod document;
pub mod error;
pub mod fetcher;

pub use document::{ServerRecord, StatusDocument};
pub use error::{FetchError, FetchResult};
pub use fetcher::StatusFetcher;
