//! Data Store Module
//!
//! Owns the in-memory job data and enforces the load-once policy.
//!
//! ## Core Concepts
//! - **Lazy load**: nothing is read until the first query asks for the data.
//! - **Once-only**: a successful load is cached for the life of the store; the
//!   source is never re-read, even if it changes on disk.
//! - **Retryable failure**: a failed load is reported to the caller and leaves
//!   the store unloaded.
//!
//! The store is created by the composition root and shared as `Arc<JobStore>`.

pub mod store;

pub use store::JobStore;
