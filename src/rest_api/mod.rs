//! # REST API
//!
//! HTTP surface for the record service: axum routes, typed errors mapped to
//! statuses, response envelopes, and server bootstrap.

mod errors;
mod response;
mod routes;
mod server;

pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use response::{
    FilteredResponse, HealthResponse, InterpretedQuery, InterpretedResponse, WelcomeResponse,
};
pub use routes::{service_routes, string_routes, AppState};
pub use server::ApiServer;
