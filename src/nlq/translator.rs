//! Query translation
//!
//! Applies the rule table in order over the lower-cased query, then rejects
//! empty and self-contradictory criteria sets before handing the result to
//! the filter engine.

use crate::filter::FilterCriteria;

use super::errors::{TranslateError, TranslateResult};
use super::rules::RULES;

/// Translate a free-text query into structured filter criteria.
///
/// Best effort only: anything outside the rule vocabulary is an
/// unparseable query.
pub fn translate(query: &str) -> TranslateResult<FilterCriteria> {
    let text = query.to_lowercase();
    let mut criteria = FilterCriteria::default();

    for rule in RULES {
        if (rule.apply)(&text, &mut criteria)? {
            tracing::debug!(rule = rule.name, "query rule matched");
        }
    }

    if criteria.is_empty() {
        return Err(TranslateError::Unparseable);
    }
    detect_conflicts(&criteria)?;

    Ok(criteria)
}

/// Reject criteria that can never match any record.
///
/// No current rule sets `max_length`, so this cannot trigger through
/// [`translate`] today; new bound rules are expected to route through it.
pub fn detect_conflicts(criteria: &FilterCriteria) -> TranslateResult<()> {
    if let (Some(min), Some(max)) = (criteria.min_length, criteria.max_length) {
        if min > max {
            return Err(TranslateError::Conflicting { min, max });
        }
    }
    Ok(())
}
