use crate::error::Result;
use crate::loader::{self, Dataset, EmbeddedSource, JobSource};

use std::sync::Arc;
use tokio::sync::OnceCell;

/// Lazily loaded, read-only job data.
///
/// The source is parsed on the first call to [`JobStore::ensure_loaded`] and
/// never again. Concurrent first callers wait on the same load. A failed load
/// leaves the cell empty, so a later call retries.
pub struct JobStore {
    source: Arc<dyn JobSource>,
    data: OnceCell<Dataset>,
}

impl JobStore {
    pub fn new(source: impl JobSource + 'static) -> Self {
        Self::with_source(Arc::new(source))
    }

    pub fn with_source(source: Arc<dyn JobSource>) -> Self {
        Self {
            source,
            data: OnceCell::new(),
        }
    }

    /// Store backed by the CSV bundled with the binary.
    pub fn bundled() -> Self {
        Self::new(EmbeddedSource)
    }

    /// Store that is already loaded with `dataset`; the source is never read.
    pub fn preloaded(dataset: Dataset) -> Self {
        Self {
            source: Arc::new(EmbeddedSource),
            data: OnceCell::new_with(Some(dataset)),
        }
    }

    pub async fn ensure_loaded(&self) -> Result<&Dataset> {
        self.data
            .get_or_try_init(|| async {
                let source_name = self.source.name();
                tracing::debug!("Loading job data from {}", source_name);

                match loader::load(self.source.as_ref()) {
                    Ok(dataset) => {
                        log_loaded(&source_name, &dataset);
                        Ok(dataset)
                    }
                    Err(e) => {
                        tracing::error!("Failed to load job data from {}: {}", source_name, e);
                        Err(e)
                    }
                }
            })
            .await
    }

    pub fn is_loaded(&self) -> bool {
        self.data.initialized()
    }

    pub fn source_name(&self) -> String {
        self.source.name()
    }
}

fn log_loaded(source_name: &str, dataset: &Dataset) {
    use crate::model::DimensionKind;

    if dataset.is_empty() {
        tracing::warn!("Job data source {} contains no data rows", source_name);
        return;
    }

    tracing::info!(
        "Loaded {} jobs from {} ({} employers, {} locations, {} position types, {} skills)",
        dataset.len(),
        source_name,
        dataset.index(DimensionKind::Employer).len(),
        dataset.index(DimensionKind::Location).len(),
        dataset.index(DimensionKind::PositionType).len(),
        dataset.index(DimensionKind::CoreCompetency).len(),
    );
}
