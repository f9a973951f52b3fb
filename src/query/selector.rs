use crate::error::JobDataError;
use crate::model::{Column, DimensionKind};
use serde::Serialize;
use std::str::FromStr;

/// Selector key meaning "every column".
pub const ALL_KEY: &str = "all";

/// What a filter request targets: every column, or a single one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnSelector {
    All,
    Column(Column),
}

impl FromStr for ColumnSelector {
    type Err = JobDataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_KEY {
            return Ok(ColumnSelector::All);
        }
        s.parse().map(ColumnSelector::Column)
    }
}

/// A selector key with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnChoice {
    pub key: &'static str,
    pub label: &'static str,
}

/// The selector table offered to list and search pages:
/// "All" followed by each dimension in column order.
pub fn column_choices() -> Vec<ColumnChoice> {
    std::iter::once(ColumnChoice {
        key: ALL_KEY,
        label: "All",
    })
    .chain(DimensionKind::ALL.into_iter().map(|kind| ColumnChoice {
        key: kind.key(),
        label: kind.label(),
    }))
    .collect()
}
