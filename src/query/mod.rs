//! Query Module
//!
//! Read-only lookups over the loaded job data.
//!
//! ## Operations
//! - **List**: every job, or the sorted distinct values/entities of one dimension.
//! - **Filter**: jobs whose chosen column contains a term, ignoring case.
//! - **Search**: jobs where any column contains a term, each job once.
//!
//! All matching is a linear scan in source order.
//!
//! ## Submodules
//! - **`engine`**: the query operations.
//! - **`selector`**: parsing of column selectors and the selector table.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: request parameters and response bodies for the HTTP API.

pub mod engine;
pub mod handlers;
pub mod selector;
pub mod types;

pub use engine::{JobListing, QueryEngine};
pub use selector::{ColumnChoice, ColumnSelector, column_choices};

#[cfg(test)]
mod tests;
