//! strand - a small, self-hostable string analysis and record service
//!
//! Clients submit strings over HTTP; the service derives their properties
//! (length, palindrome status, character statistics, hash identity),
//! persists records, and answers structured or free-text filter queries.

pub mod cli;
pub mod config;
pub mod filter;
pub mod nlq;
pub mod record;
pub mod rest_api;
pub mod store;
