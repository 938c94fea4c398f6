//! The lexical rule table
//!
//! Translation is an ordered cascade of independent pattern matches over the
//! lower-cased query, not a grammar. Each rule writes into the shared
//! criteria set; a later rule that sets the same field overwrites the
//! earlier value.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::filter::FilterCriteria;

use super::errors::{TranslateError, TranslateResult};

/// A single translation rule: a recognizer plus its effect on the criteria.
pub(crate) struct Rule {
    /// Name used in trace output
    pub name: &'static str,
    /// Applies the rule; returns whether it matched
    pub apply: fn(&str, &mut FilterCriteria) -> TranslateResult<bool>,
}

/// Rules in application order.
///
/// Order matters: "first vowel" is evaluated after letter containment and
/// overrides it when both appear in one query.
pub(crate) const RULES: &[Rule] = &[
    Rule {
        name: "palindrome",
        apply: palindrome,
    },
    Rule {
        name: "single_word",
        apply: single_word,
    },
    Rule {
        name: "length_bound",
        apply: length_bound,
    },
    Rule {
        name: "contains_letter",
        apply: contains_letter,
    },
    Rule {
        name: "first_vowel",
        apply: first_vowel,
    },
];

static LENGTH_BOUND: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"longer than (\d+)|more than (\d+) character").expect("length bound pattern")
});

static CONTAINS_LETTER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"contain(?:s|ing)?\s+(?:the\s+)?(?:letter\s+)?([a-z])")
        .expect("contains letter pattern")
});

fn palindrome(text: &str, criteria: &mut FilterCriteria) -> TranslateResult<bool> {
    if text.contains("palindrome") || text.contains("palindromic") {
        criteria.is_palindrome = Some(true);
        return Ok(true);
    }
    Ok(false)
}

fn single_word(text: &str, criteria: &mut FilterCriteria) -> TranslateResult<bool> {
    if text.contains("single word") || text.contains("one word") {
        criteria.word_count = Some(1);
        return Ok(true);
    }
    Ok(false)
}

/// "longer than N" / "more than N character(s)" means strictly greater.
fn length_bound(text: &str, criteria: &mut FilterCriteria) -> TranslateResult<bool> {
    let caps = match LENGTH_BOUND.captures(text) {
        Some(caps) => caps,
        None => return Ok(false),
    };

    let digits = match caps.get(1).or_else(|| caps.get(2)) {
        Some(m) => m.as_str(),
        None => return Ok(false),
    };

    let bound: usize = digits.parse().map_err(|e: std::num::ParseIntError| {
        TranslateError::Malformed {
            detail: e.to_string(),
        }
    })?;
    let min = bound.checked_add(1).ok_or_else(|| TranslateError::Malformed {
        detail: "length bound out of range".to_string(),
    })?;

    criteria.min_length = Some(min);
    Ok(true)
}

fn contains_letter(text: &str, criteria: &mut FilterCriteria) -> TranslateResult<bool> {
    let caps = match CONTAINS_LETTER.captures(text) {
        Some(caps) => caps,
        None => return Ok(false),
    };

    if let Some(letter) = caps.get(1).and_then(|m| m.as_str().chars().next()) {
        criteria.contains_character = Some(letter);
        return Ok(true);
    }
    Ok(false)
}

/// "first vowel" is interpreted as the letter 'a'.
fn first_vowel(text: &str, criteria: &mut FilterCriteria) -> TranslateResult<bool> {
    if text.contains("first vowel") {
        criteria.contains_character = Some('a');
        return Ok(true);
    }
    Ok(false)
}
