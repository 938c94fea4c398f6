//! String record model
//!
//! Pure computation of a record and its derived properties. No I/O here;
//! persistence belongs to the store and creation timestamps are the only
//! non-deterministic input.

mod properties;
mod string_record;

pub use properties::{content_hash, StringProperties};
pub use string_record::StringRecord;
