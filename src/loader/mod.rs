//! Tabular Loader
//!
//! Turns a header-bearing CSV source into typed jobs and deduplicated
//! per-dimension indexes.
//!
//! ## Workflow
//! 1. **Read**: a [`JobSource`] hands back the raw text (bundled, file or inline).
//! 2. **Parse**: [`parse_jobs`] walks the records positionally and builds a [`Dataset`].
//! 3. **Index**: each new employer, location, position type and skill is
//!    appended to its [`DimensionIndex`] in first-seen order.
//!
//! The loader itself is stateless; the once-only policy lives in `store`.

pub mod dataset;
pub mod parser;
pub mod source;

pub use dataset::{Dataset, DimensionIndex};
pub use parser::parse_jobs;
pub use source::{EmbeddedSource, FileSource, JobSource, TextSource};

use crate::error::{JobDataError, Result};

/// Read `source` and parse it in one pass.
pub fn load(source: &dyn JobSource) -> Result<Dataset> {
    let text = source
        .read()
        .map_err(|e| JobDataError::SourceUnavailable {
            source_name: source.name(),
            source: e,
        })?;
    parse_jobs(&text)
}
