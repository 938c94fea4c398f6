//! Persistence tests for the file-backed store
//!
//! Records written through one store (or router) instance must be visible
//! to a fresh instance over the same data file, and damaged storage must
//! degrade to an empty collection rather than an error.

use std::fs;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::util::ServiceExt;

use strand::config::ServiceConfig;
use strand::record::StringRecord;
use strand::rest_api::ApiServer;
use strand::store::{JsonFileStore, RecordStore};

fn router_over(dir: &TempDir) -> axum::Router {
    let store = Arc::new(JsonFileStore::new(dir.path().join("data.json")));
    ApiServer::new(ServiceConfig::default(), store).router()
}

#[test]
fn test_collection_survives_store_reopen() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("data.json");

    let records = vec![StringRecord::create("racecar"), StringRecord::create("a")];
    JsonFileStore::new(&path).save_all(&records).unwrap();

    let reopened = JsonFileStore::new(&path);
    assert_eq!(reopened.load_all(), records);
}

#[test]
fn test_saved_file_is_valid_json() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("data.json");

    JsonFileStore::new(&path)
        .save_all(&[StringRecord::create("inspectable")])
        .unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let parsed: Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed[0]["value"], "inspectable");
}

#[tokio::test]
async fn test_records_survive_server_restart() {
    let dir = TempDir::new().expect("Failed to create temp dir");

    // First "process": create a record
    let router = router_over(&dir);
    let request = Request::builder()
        .method("POST")
        .uri("/strings")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({"value": "durable"}).to_string()))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    // Second "process": a fresh router over the same data file sees it
    let router = router_over(&dir);
    let request = Request::builder()
        .uri("/strings/durable")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["value"], "durable");
}

#[tokio::test]
async fn test_corrupt_data_file_serves_as_empty() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(dir.path().join("data.json"), "{definitely not json").unwrap();

    let router = router_over(&dir);
    let request = Request::builder()
        .uri("/strings")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["count"], 0);
}
