use super::selector::{ALL_KEY, ColumnSelector};
use crate::error::Result;
use crate::model::{Column, DimensionEntity, DimensionKind, Job, sort_by_name};
use crate::store::JobStore;

use std::sync::Arc;

/// Jobs returned for a list-page request, with the title to show above them.
#[derive(Debug, Clone, PartialEq)]
pub struct JobListing {
    pub title: String,
    pub jobs: Vec<Job>,
}

/// Read-only queries over a [`JobStore`].
///
/// Every operation loads the store first if needed, so the first query of the
/// process may return a load error. String-keyed entry points validate their
/// selector before touching the store.
#[derive(Clone)]
pub struct QueryEngine {
    store: Arc<JobStore>,
}

impl QueryEngine {
    pub fn new(store: Arc<JobStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<JobStore> {
        &self.store
    }

    /// Every job in source order. The result is a copy.
    pub async fn list_all_jobs(&self) -> Result<Vec<Job>> {
        let dataset = self.store.ensure_loaded().await?;
        Ok(dataset.jobs().to_vec())
    }

    /// Distinct values of a dimension, ascending by ordinal string order.
    pub async fn list_distinct_values(&self, kind: &str) -> Result<Vec<String>> {
        let kind: DimensionKind = kind.parse()?;
        self.distinct_values(kind).await
    }

    pub async fn distinct_values(&self, kind: DimensionKind) -> Result<Vec<String>> {
        let dataset = self.store.ensure_loaded().await?;
        let mut values: Vec<String> = dataset
            .index(kind)
            .entities()
            .iter()
            .map(|e| e.value().to_string())
            .collect();
        values.sort();
        Ok(values)
    }

    /// Entities of a dimension sorted by name; ties keep first-seen order.
    pub async fn list_dimension_entities(&self, kind: &str) -> Result<Vec<DimensionEntity>> {
        let kind: DimensionKind = kind.parse()?;
        self.dimension_entities(kind).await
    }

    pub async fn dimension_entities(&self, kind: DimensionKind) -> Result<Vec<DimensionEntity>> {
        let dataset = self.store.ensure_loaded().await?;
        let mut entities = dataset.index(kind).entities().to_vec();
        sort_by_name(&mut entities);
        Ok(entities)
    }

    /// Jobs whose `column` contains `substring`, ignoring case.
    ///
    /// `column` is a dimension key, `"name"`, or `"all"` (which runs
    /// [`QueryEngine::search_all`]).
    pub async fn filter_by_column(&self, column: &str, substring: &str) -> Result<Vec<Job>> {
        match column.parse::<ColumnSelector>()? {
            ColumnSelector::All => self.search_all(substring).await,
            ColumnSelector::Column(column) => self.filter(column, substring).await,
        }
    }

    pub async fn filter(&self, column: Column, substring: &str) -> Result<Vec<Job>> {
        let dataset = self.store.ensure_loaded().await?;
        let needle = substring.to_lowercase();

        let jobs: Vec<Job> = dataset
            .jobs()
            .iter()
            .filter(|job| contains_ignore_case(job.field(column), &needle))
            .cloned()
            .collect();

        tracing::debug!(
            "Filter {}~'{}' matched {} jobs",
            column.key(),
            substring,
            jobs.len()
        );
        Ok(jobs)
    }

    /// Jobs where any column contains `substring`, ignoring case.
    /// Each job appears at most once, in source order.
    pub async fn search_all(&self, substring: &str) -> Result<Vec<Job>> {
        let dataset = self.store.ensure_loaded().await?;
        let needle = substring.to_lowercase();

        let jobs: Vec<Job> = dataset
            .jobs()
            .iter()
            .filter(|job| {
                Column::ALL
                    .iter()
                    .any(|column| contains_ignore_case(job.field(*column), &needle))
            })
            .cloned()
            .collect();

        tracing::debug!("Search '{}' matched {} jobs", substring, jobs.len());
        Ok(jobs)
    }

    /// List-page lookup: `"all"` (any case) lists every job, anything else
    /// filters by that column.
    pub async fn list_jobs_by_column(&self, column: &str, value: &str) -> Result<JobListing> {
        if column.eq_ignore_ascii_case(ALL_KEY) {
            return Ok(JobListing {
                title: "All Jobs".to_string(),
                jobs: self.list_all_jobs().await?,
            });
        }

        let selected: Column = column.parse()?;
        Ok(JobListing {
            title: format!("Jobs with {}: {}", selected.label(), value),
            jobs: self.filter(selected, value).await?,
        })
    }
}

fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    needle_lower.is_empty() || haystack.to_lowercase().contains(needle_lower)
}
