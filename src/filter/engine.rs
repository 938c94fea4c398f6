//! Conjunctive filter application
//!
//! Filters are independent set intersections: application order cannot
//! change the result.

use crate::record::StringRecord;

use super::criteria::FilterCriteria;

/// Result of applying criteria to a collection.
#[derive(Debug, Clone)]
pub struct FilterOutcome {
    /// Records that satisfied every criterion
    pub records: Vec<StringRecord>,
    /// Echo of the validated criteria that were applied
    pub applied: FilterCriteria,
}

/// Apply criteria to a collection, keeping records that satisfy all of them.
pub fn apply_filters(records: Vec<StringRecord>, criteria: FilterCriteria) -> FilterOutcome {
    let records = records
        .into_iter()
        .filter(|record| criteria.matches(record))
        .collect();

    FilterOutcome {
        records,
        applied: criteria,
    }
}
