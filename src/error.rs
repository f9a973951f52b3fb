//! Error types shared by the loader, the store and the query layer.

use thiserror::Error;

/// Errors surfaced to callers of the store and query engine.
///
/// Load failures (`SourceUnavailable`, `MalformedRecord`) are returned to the
/// caller whose query triggered the load and leave the store unloaded, so the
/// next query retries. `InvalidDimensionKind` never touches store state.
#[derive(Debug, Error)]
pub enum JobDataError {
    /// The tabular source is missing or could not be read.
    #[error("job data source '{source_name}' is unavailable: {source}")]
    SourceUnavailable {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    /// A row could not be turned into a job.
    #[error("malformed record at line {line}: {reason}")]
    MalformedRecord { line: u64, reason: String },

    /// The selector passed to a query is not a known column.
    #[error("invalid dimension kind: '{0}'")]
    InvalidDimensionKind(String),
}

impl JobDataError {
    /// True for errors raised while loading the source.
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            Self::SourceUnavailable { .. } | Self::MalformedRecord { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, JobDataError>;
