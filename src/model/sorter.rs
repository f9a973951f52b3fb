//! Ordering by display name.
//!
//! Names compare ordinally (byte-wise UTF-8, which agrees with code-point
//! order), so `"Zeta" < "alpha"`. Sorting is stable: equal names keep their
//! input order.

use super::types::{DimensionEntity, Job};
use std::cmp::Ordering;

/// Anything that has a display name to sort on.
pub trait Named {
    fn display_name(&self) -> &str;
}

impl Named for DimensionEntity {
    fn display_name(&self) -> &str {
        self.value()
    }
}

impl Named for Job {
    fn display_name(&self) -> &str {
        self.name()
    }
}

pub fn compare_by_name<T: Named>(a: &T, b: &T) -> Ordering {
    a.display_name().cmp(b.display_name())
}

pub fn sort_by_name<T: Named>(items: &mut [T]) {
    items.sort_by(compare_by_name);
}
