//! Typed filter criteria
//!
//! Criteria are parsed from raw query parameters and validated before any
//! record is touched. Serialization omits unset fields, so the echoed
//! criteria object contains exactly the filters that were applied.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::record::StringRecord;

use super::errors::{FilterError, FilterResult};

/// A set of optional, independently combinable record filters.
///
/// All supplied criteria must hold for a record to pass (logical AND).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Palindrome status must equal this value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_palindrome: Option<bool>,

    /// Character count must be at least this value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    /// Character count must be at most this value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    /// Word count must equal this value exactly
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<usize>,

    /// Character that must appear in the value (case-insensitive)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contains_character: Option<char>,
}

impl FilterCriteria {
    /// Parse criteria from raw query parameters.
    ///
    /// Unknown parameters are ignored; recognized parameters with invalid
    /// values are rejected. `is_palindrome` normalizes to a boolean: any
    /// value other than case-insensitive "true" is false.
    pub fn from_params(params: &HashMap<String, String>) -> FilterResult<Self> {
        let mut criteria = Self::default();

        for (key, value) in params {
            match key.as_str() {
                "is_palindrome" => {
                    criteria.is_palindrome = Some(value.eq_ignore_ascii_case("true"));
                }
                "min_length" => criteria.min_length = Some(parse_bound("min_length", value)?),
                "max_length" => criteria.max_length = Some(parse_bound("max_length", value)?),
                "word_count" => criteria.word_count = Some(parse_bound("word_count", value)?),
                "contains_character" => {
                    let mut chars = value.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) => criteria.contains_character = Some(c),
                        _ => return Err(FilterError::NotASingleCharacter),
                    }
                }
                _ => {}
            }
        }

        Ok(criteria)
    }

    /// True if no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.is_palindrome.is_none()
            && self.min_length.is_none()
            && self.max_length.is_none()
            && self.word_count.is_none()
            && self.contains_character.is_none()
    }

    /// Check a record against every supplied criterion.
    pub fn matches(&self, record: &StringRecord) -> bool {
        if let Some(want) = self.is_palindrome {
            if record.properties.is_palindrome != want {
                return false;
            }
        }
        if let Some(min) = self.min_length {
            if record.properties.length < min {
                return false;
            }
        }
        if let Some(max) = self.max_length {
            if record.properties.length > max {
                return false;
            }
        }
        if let Some(count) = self.word_count {
            if record.properties.word_count != count {
                return false;
            }
        }
        if let Some(needle) = self.contains_character {
            // Case-insensitive on both sides
            let needle = needle.to_lowercase().to_string();
            if !record.value.to_lowercase().contains(&needle) {
                return false;
            }
        }
        true
    }
}

/// Parse a non-negative integer bound.
fn parse_bound(name: &'static str, value: &str) -> FilterResult<usize> {
    let parsed: i64 = value.parse().map_err(|_| FilterError::NotAnInteger(name))?;
    if parsed < 0 {
        return Err(FilterError::Negative(name));
    }
    Ok(parsed as usize)
}
