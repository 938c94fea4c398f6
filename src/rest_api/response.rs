//! # Response Formatting
//!
//! Standard response envelopes for the record API. Filter responses echo
//! back what was applied or how the query was interpreted so callers can
//! audit the interpretation.

use serde::Serialize;

use crate::filter::FilterCriteria;
use crate::record::StringRecord;

/// Filtered list response
#[derive(Debug, Serialize)]
pub struct FilteredResponse {
    pub data: Vec<StringRecord>,
    pub count: usize,
    pub filters_applied: FilterCriteria,
}

impl FilteredResponse {
    pub fn new(data: Vec<StringRecord>, filters_applied: FilterCriteria) -> Self {
        let count = data.len();
        Self {
            data,
            count,
            filters_applied,
        }
    }
}

/// Echo of how a free-text query was interpreted
#[derive(Debug, Serialize)]
pub struct InterpretedQuery {
    pub original: String,
    pub parsed_filters: FilterCriteria,
}

/// Natural-language filter response
#[derive(Debug, Serialize)]
pub struct InterpretedResponse {
    pub data: Vec<StringRecord>,
    pub count: usize,
    pub interpreted_query: InterpretedQuery,
}

impl InterpretedResponse {
    pub fn new(data: Vec<StringRecord>, original: String, parsed_filters: FilterCriteria) -> Self {
        let count = data.len();
        Self {
            data,
            count,
            interpreted_query: InterpretedQuery {
                original,
                parsed_filters,
            },
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Root welcome response
#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filtered_response_serialization() {
        let criteria = FilterCriteria {
            word_count: Some(1),
            ..Default::default()
        };
        let response = FilteredResponse::new(vec![StringRecord::create("racecar")], criteria);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["count"], 1);
        assert_eq!(json["filters_applied"], serde_json::json!({"word_count": 1}));
    }

    #[test]
    fn test_interpreted_response_echoes_original() {
        let criteria = FilterCriteria {
            is_palindrome: Some(true),
            ..Default::default()
        };
        let response =
            InterpretedResponse::new(Vec::new(), "palindromic strings".to_string(), criteria);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["count"], 0);
        assert_eq!(json["interpreted_query"]["original"], "palindromic strings");
        assert_eq!(
            json["interpreted_query"]["parsed_filters"]["is_palindrome"],
            true
        );
    }
}
