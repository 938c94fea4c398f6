//! Natural-language filter translator
//!
//! Maps free-text queries onto structured filter criteria via a fixed,
//! ordered set of lexical rules. Later rules overwrite earlier ones on the
//! same field; queries no rule recognizes are rejected as unparseable.

mod errors;
mod rules;
mod translator;

pub use errors::{TranslateError, TranslateResult};
pub use translator::{detect_conflicts, translate};
