//! HTTP Data Types
//!
//! Request parameters and JSON response bodies for the list and search
//! endpoints. Jobs and entities cross the boundary as plain strings.

use super::selector::{ALL_KEY, ColumnChoice};
use crate::model::Job;
use serde::{Deserialize, Serialize};

/// A job flattened for JSON output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobView {
    pub name: String,
    pub employer: String,
    pub location: String,
    pub position_type: String,
    pub core_competency: String,
}

impl From<&Job> for JobView {
    fn from(job: &Job) -> Self {
        Self {
            name: job.name().to_string(),
            employer: job.employer().to_string(),
            location: job.location().to_string(),
            position_type: job.position_type().to_string(),
            core_competency: job.core_competency().to_string(),
        }
    }
}

/// Query string of `GET /list/jobs`.
#[derive(Debug, Deserialize)]
pub struct ListJobsParams {
    pub column: String,
    #[serde(default)]
    pub value: String,
}

/// Query string of `GET /list/values`.
#[derive(Debug, Deserialize)]
pub struct ListValuesParams {
    pub column: String,
}

/// Query string of `GET /search/results`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(rename = "searchType", default = "default_search_type")]
    pub search_type: String,
    #[serde(rename = "searchTerm", default)]
    pub search_term: String,
}

fn default_search_type() -> String {
    ALL_KEY.to_string()
}

/// Body of `GET /list`: selector table plus every dimension's entities.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListPageResponse {
    pub columns: Vec<ColumnChoiceView>,
    pub employers: Vec<String>,
    pub locations: Vec<String>,
    pub positions: Vec<String>,
    pub skills: Vec<String>,
}

/// Body of `GET /search`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchPageResponse {
    pub columns: Vec<ColumnChoiceView>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnChoiceView {
    pub key: String,
    pub label: String,
}

impl From<ColumnChoice> for ColumnChoiceView {
    fn from(choice: ColumnChoice) -> Self {
        Self {
            key: choice.key.to_string(),
            label: choice.label.to_string(),
        }
    }
}

/// Body of `GET /list/jobs` and `GET /search/results`.
#[derive(Debug, Serialize, Deserialize)]
pub struct JobsResponse {
    pub title: String,
    pub count: usize,
    pub jobs: Vec<JobView>,
}

impl JobsResponse {
    pub fn new(title: impl Into<String>, jobs: &[Job]) -> Self {
        Self {
            title: title.into(),
            count: jobs.len(),
            jobs: jobs.iter().map(JobView::from).collect(),
        }
    }
}

/// Body of `GET /list/values`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ValuesResponse {
    pub column: String,
    pub label: String,
    pub values: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
