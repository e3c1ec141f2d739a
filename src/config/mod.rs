//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → command line flags overlaid (cli.rs)
//!     → validation.rs (semantic checks)
//!     → CheckConfig (validated, immutable for the run)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Threshold ranges are parsed during deserialization
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{CheckConfig, ThresholdPair};
pub use validation::{validate_config, ValidationError};
