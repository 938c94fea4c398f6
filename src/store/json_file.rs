//! JSON file record store
//!
//! The whole collection lives in one pretty-printed JSON file. Loads read
//! the full file; saves replace it through a temp-file-and-rename sequence
//! so readers never observe a partially written collection.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::record::StringRecord;

use super::errors::StoreResult;
use super::RecordStore;

/// File-backed store holding the full record collection.
pub struct JsonFileStore {
    path: PathBuf,
    // Serializes file access between concurrent load/save calls
    lock: Mutex<()>,
}

impl JsonFileStore {
    /// Create a store backed by the given file path.
    ///
    /// The file is not created until the first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for JsonFileStore {
    fn load_all(&self) -> Vec<StringRecord> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());

        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "data file unreadable, treating as empty"
                );
                return Vec::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "data file corrupt, treating as empty"
                );
                Vec::new()
            }
        }
    }

    fn save_all(&self, records: &[StringRecord]) -> StoreResult<()> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let encoded = serde_json::to_string_pretty(records)?;

        // Write to a sibling temp file, fsync, then rename into place.
        let tmp_path = self.path.with_extension("json.tmp");
        let mut tmp = File::create(&tmp_path)?;
        tmp.write_all(encoded.as_bytes())?;
        tmp.sync_all()?;
        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_store(dir: &TempDir) -> JsonFileStore {
        JsonFileStore::new(dir.path().join("data.json"))
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir);
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir);

        let records = vec![StringRecord::create("racecar"), StringRecord::create("a")];
        store.save_all(&records).unwrap();

        assert_eq!(store.load_all(), records);
    }

    #[test]
    fn test_save_replaces_prior_contents() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir);

        store.save_all(&[StringRecord::create("first")]).unwrap();
        let replacement = vec![StringRecord::create("second")];
        store.save_all(&replacement).unwrap();

        assert_eq!(store.load_all(), replacement);
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir);

        fs::write(store.path(), "{not json").unwrap();
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested/deep/data.json"));

        store.save_all(&[StringRecord::create("nested")]).unwrap();
        assert_eq!(store.load_all().len(), 1);
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let dir = TempDir::new().unwrap();
        let store = temp_store(&dir);

        store.save_all(&[StringRecord::create("clean")]).unwrap();
        assert!(!store.path().with_extension("json.tmp").exists());
    }
}
