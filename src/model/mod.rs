//! Entity Model
//!
//! Value-like types for the job data set.
//!
//! ## Types
//! - **`DimensionKind`**: the closed set of categorical axes (employer, location,
//!   position type, core competency) with their selector keys and labels.
//! - **`DimensionEntity`**: one distinct value of a dimension, equal by (kind, value).
//! - **`Column`**: a filterable field, i.e. a dimension or the job name.
//! - **`Job`**: an immutable posting referencing one entity per dimension.
//!
//! ## Submodules
//! - **`types`**: the types above.
//! - **`sorter`**: stable ordering by display name.

pub mod sorter;
pub mod types;

pub use sorter::{Named, compare_by_name, sort_by_name};
pub use types::{Column, DimensionEntity, DimensionKind, Job};
