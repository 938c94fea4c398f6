//! Record store subsystem
//!
//! The store owns the canonical collection: every operation loads the full
//! collection, and mutating operations write the full collection back.
//! Loading never fails — an absent or corrupt data file is an empty
//! collection. Saving replaces the file atomically.

mod errors;
mod json_file;
mod memory;

pub use errors::{StoreError, StoreResult};
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::record::StringRecord;

/// Load/save contract for the record collection.
pub trait RecordStore: Send + Sync {
    /// Load the full collection. Missing or corrupt storage yields an
    /// empty collection, never an error.
    fn load_all(&self) -> Vec<StringRecord>;

    /// Persist the full collection, replacing prior contents.
    fn save_all(&self, records: &[StringRecord]) -> StoreResult<()>;
}
