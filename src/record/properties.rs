//! Derived string properties
//!
//! All analysis is pure and deterministic: the same value always produces
//! the same properties, and the content hash doubles as record identity.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Derived properties of a stored string, computed once at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringProperties {
    /// Character (Unicode scalar) count
    pub length: usize,
    /// True if the lower-cased, space-stripped value reads the same reversed
    pub is_palindrome: bool,
    /// Count of distinct characters (case-sensitive, includes whitespace)
    pub unique_characters: usize,
    /// Number of whitespace-delimited tokens
    pub word_count: usize,
    /// Hex-encoded SHA-256 of the UTF-8 bytes of the value
    pub content_hash: String,
    /// Occurrence count per character, deterministically ordered
    pub character_frequency: BTreeMap<char, usize>,
}

impl StringProperties {
    /// Analyze a value and compute all derived properties.
    ///
    /// Total over all string inputs: the empty string yields length 0,
    /// word count 0, an empty frequency map, and counts as a palindrome.
    pub fn analyze(value: &str) -> Self {
        let mut character_frequency = BTreeMap::new();
        for c in value.chars() {
            *character_frequency.entry(c).or_insert(0) += 1;
        }

        Self {
            length: value.chars().count(),
            is_palindrome: is_palindrome(value),
            unique_characters: character_frequency.len(),
            word_count: value.split_whitespace().count(),
            content_hash: content_hash(value),
            character_frequency,
        }
    }
}

/// Hex-encoded SHA-256 of the UTF-8 encoding of a value.
pub fn content_hash(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    hex::encode(hasher.finalize())
}

/// Palindrome check over the lower-cased value with spaces removed.
fn is_palindrome(value: &str) -> bool {
    let cleaned: Vec<char> = value.to_lowercase().chars().filter(|c| *c != ' ').collect();
    cleaned.iter().eq(cleaned.iter().rev())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_counts_characters() {
        assert_eq!(StringProperties::analyze("hello world").length, 11);
        assert_eq!(StringProperties::analyze("héllo").length, 5);
    }

    #[test]
    fn test_palindrome_case_insensitive() {
        assert!(StringProperties::analyze("RaceCar").is_palindrome);
        assert!(!StringProperties::analyze("hello world").is_palindrome);
    }

    #[test]
    fn test_palindrome_ignores_spaces() {
        assert!(StringProperties::analyze("nurses run").is_palindrome);
        assert!(StringProperties::analyze("Was it a car or a cat I saw").is_palindrome);
    }

    #[test]
    fn test_word_count() {
        assert_eq!(StringProperties::analyze("hello world test").word_count, 3);
        assert_eq!(StringProperties::analyze("  spaced   out  ").word_count, 2);
    }

    #[test]
    fn test_unique_characters_case_sensitive() {
        // h, e, l, o
        assert_eq!(StringProperties::analyze("hello").unique_characters, 4);
        // 'A' and 'a' are distinct; the space counts too
        assert_eq!(StringProperties::analyze("hello world").unique_characters, 8);
        assert_eq!(StringProperties::analyze("Aa").unique_characters, 2);
    }

    #[test]
    fn test_character_frequency() {
        let props = StringProperties::analyze("test");
        assert_eq!(props.character_frequency[&'t'], 2);
        assert_eq!(props.character_frequency[&'e'], 1);
        assert_eq!(props.character_frequency[&'s'], 1);
    }

    #[test]
    fn test_content_hash_known_vector() {
        assert_eq!(
            content_hash("hello"),
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn test_content_hash_deterministic() {
        assert_eq!(content_hash("racecar"), content_hash("racecar"));
        assert_ne!(content_hash("racecar"), content_hash("Racecar"));
    }

    #[test]
    fn test_empty_string_is_total() {
        let props = StringProperties::analyze("");
        assert_eq!(props.length, 0);
        assert_eq!(props.word_count, 0);
        assert_eq!(props.unique_characters, 0);
        assert!(props.is_palindrome);
        assert!(props.character_frequency.is_empty());
    }
}
