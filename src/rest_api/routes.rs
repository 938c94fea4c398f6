//! String record routes
//!
//! Every handler re-reads the full collection from the store. Create and
//! delete serialize their load-modify-save sequence through the state's
//! write lock; filtering reads take no lock.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::Value;

use crate::filter::{apply_filters, FilterCriteria};
use crate::nlq;
use crate::record::StringRecord;
use crate::store::RecordStore;

use super::errors::{ApiError, ApiResult};
use super::response::{FilteredResponse, HealthResponse, InterpretedResponse, WelcomeResponse};

// ==================
// Shared State
// ==================

/// State shared across record handlers
pub struct AppState {
    store: Arc<dyn RecordStore>,
    // Serializes load-modify-save sequences of mutating handlers
    write_lock: tokio::sync::Mutex<()>,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            write_lock: tokio::sync::Mutex::new(()),
        }
    }
}

// ==================
// Routers
// ==================

/// Service-level routes (root and health check)
pub fn service_routes() -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
}

/// String record routes
pub fn string_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/strings", post(create_string))
        .route("/strings", get(list_strings))
        .route(
            "/strings/filter-by-natural-language",
            get(natural_language_filter),
        )
        .route("/strings/:value", get(get_string))
        .route("/strings/:value", delete(delete_string))
        .with_state(state)
}

// ==================
// Request Types
// ==================

#[derive(Debug, Deserialize)]
pub struct NaturalLanguageParams {
    pub query: String,
}

// ==================
// Handlers
// ==================

/// Welcome message at the root
async fn root_handler() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the strand string analysis service".to_string(),
    })
}

/// Health check handler
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Create and analyze a new string
///
/// The body is inspected as raw JSON so a missing or null `value` (400) is
/// distinguished from a non-string one (422).
async fn create_string(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<Value>,
) -> ApiResult<(StatusCode, Json<StringRecord>)> {
    let value = match payload.get("value") {
        None | Some(Value::Null) => return Err(ApiError::MissingValue),
        Some(Value::String(value)) => value.clone(),
        Some(_) => return Err(ApiError::ValueNotString),
    };

    let record = StringRecord::create(value);

    let _guard = state.write_lock.lock().await;
    let mut records = state.store.load_all();
    if records.iter().any(|existing| existing.id == record.id) {
        return Err(ApiError::Duplicate);
    }
    records.push(record.clone());
    state.store.save_all(&records)?;

    tracing::info!(id = %record.id, length = record.properties.length, "record created");
    Ok((StatusCode::CREATED, Json(record)))
}

/// List records, optionally filtered by structured criteria
async fn list_strings(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<FilteredResponse>> {
    let criteria = FilterCriteria::from_params(&params)?;

    let records = state.store.load_all();
    let outcome = apply_filters(records, criteria);

    Ok(Json(FilteredResponse::new(outcome.records, outcome.applied)))
}

/// Filter records with a free-text query
async fn natural_language_filter(
    State(state): State<Arc<AppState>>,
    Query(params): Query<NaturalLanguageParams>,
) -> ApiResult<Json<InterpretedResponse>> {
    let criteria = nlq::translate(&params.query)?;

    let records = state.store.load_all();
    let outcome = apply_filters(records, criteria);

    Ok(Json(InterpretedResponse::new(
        outcome.records,
        params.query,
        outcome.applied,
    )))
}

/// Get a record by its exact value
async fn get_string(
    State(state): State<Arc<AppState>>,
    Path(value): Path<String>,
) -> ApiResult<Json<StringRecord>> {
    let records = state.store.load_all();

    match records.into_iter().find(|record| record.value == value) {
        Some(record) => Ok(Json(record)),
        None => Err(ApiError::NotFound),
    }
}

/// Delete a record by its exact value
async fn delete_string(
    State(state): State<Arc<AppState>>,
    Path(value): Path<String>,
) -> ApiResult<StatusCode> {
    let _guard = state.write_lock.lock().await;
    let mut records = state.store.load_all();

    let original_len = records.len();
    records.retain(|record| record.value != value);
    if records.len() == original_len {
        return Err(ApiError::NotFound);
    }
    state.store.save_all(&records)?;

    tracing::info!("record deleted");
    Ok(StatusCode::NO_CONTENT)
}
