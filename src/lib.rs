//! Tech Jobs Library
//!
//! An in-memory store of job postings loaded once from a CSV file, with
//! lookups by category and free-text search.
//!
//! ## Architecture Modules
//! - **`model`**: Value types for jobs and their four dimensions (employer,
//!   location, position type, core competency), plus ordering by name.
//! - **`loader`**: Parses a header-bearing CSV source into jobs and
//!   deduplicated per-dimension indexes.
//! - **`store`**: Owns the parsed data and guarantees it is loaded at most once,
//!   on first use, with failed loads left retryable.
//! - **`query`**: Listing, filtering and search operations, and the HTTP
//!   handlers that expose them.
//! - **`config`**: Environment and command-line configuration for the binary.
//! - **`error`**: The error type shared by all of the above.

pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod query;
pub mod store;

pub use error::{JobDataError, Result};
