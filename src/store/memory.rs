//! In-memory record store
//!
//! Backs router unit tests and ephemeral use; contents are lost on drop.

use std::sync::RwLock;

use crate::record::StringRecord;

use super::errors::StoreResult;
use super::RecordStore;

/// Volatile store holding the collection behind a read-write lock.
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<Vec<StringRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryStore {
    fn load_all(&self) -> Vec<StringRecord> {
        self.records.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn save_all(&self, records: &[StringRecord]) -> StoreResult<()> {
        *self.records.write().unwrap_or_else(|e| e.into_inner()) = records.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        assert!(MemoryStore::new().load_all().is_empty());
    }

    #[test]
    fn test_save_replaces_collection() {
        let store = MemoryStore::new();
        store.save_all(&[StringRecord::create("one")]).unwrap();
        store
            .save_all(&[StringRecord::create("two"), StringRecord::create("three")])
            .unwrap();
        assert_eq!(store.load_all().len(), 2);
    }
}
