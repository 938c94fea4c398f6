//! The stored string record

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::properties::StringProperties;

/// A stored string plus its derived properties and identity.
///
/// Identity is the content hash of `value`, so two submissions of the same
/// value collide rather than update. Records are immutable once created and
/// destroyed only by explicit deletion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringRecord {
    /// Content hash of `value`, unique across the store
    pub id: String,
    /// The original input, unmodified
    pub value: String,
    /// Derived properties, computed once
    pub properties: StringProperties,
    /// RFC-3339 UTC creation timestamp with `Z` suffix
    pub created_at: String,
}

impl StringRecord {
    /// Create a record for a value, computing all derived properties.
    ///
    /// Persistence is the caller's concern.
    pub fn create(value: impl Into<String>) -> Self {
        let value = value.into();
        let properties = StringProperties::analyze(&value);
        Self {
            id: properties.content_hash.clone(),
            value,
            properties,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }
}
