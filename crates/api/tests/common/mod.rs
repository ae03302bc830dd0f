#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use folio_api::config::ServerConfig;
use folio_api::router::build_app_router;
use folio_api::state::AppState;
use folio_db::{DatabaseConfig, Document, DocumentStore, MemoryDocumentStore, StorageError, StoreHandle};

/// Build a test `ServerConfig` with both database variables set.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        database: DatabaseConfig {
            url: Some("memory://test".to_string()),
            name: Some("portfolio".to_string()),
        },
    }
}

/// Build the full application router with all middleware layers around
/// the given store handle.
pub fn build_test_app(store: StoreHandle) -> Router {
    build_test_app_with_config(store, test_config())
}

pub fn build_test_app_with_config(store: StoreHandle, config: ServerConfig) -> Router {
    let state = AppState {
        store,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

pub fn memory_store() -> StoreHandle {
    StoreHandle::connected(MemoryDocumentStore::new())
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST a raw body with a JSON content type, for payloads that are not
/// valid JSON.
pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Seed `count` projects named `Project 0..count` directly through the handle.
pub async fn seed_projects(store: &StoreHandle, count: usize) {
    for i in 0..count {
        store
            .create_document(
                "project",
                &serde_json::json!({
                    "title": format!("Project {i}"),
                    "category": "Photography",
                    "cover_url": format!("https://cdn.example.com/{i}.jpg"),
                }),
            )
            .await
            .unwrap();
    }
}

/// In-process store that counts write attempts.
#[derive(Default)]
pub struct CountingStore {
    inner: MemoryDocumentStore,
    inserts: Arc<AtomicUsize>,
}

impl CountingStore {
    /// Returns the store plus a shared counter of `insert` calls.
    pub fn new() -> (Self, Arc<AtomicUsize>) {
        let store = Self::default();
        let counter = Arc::clone(&store.inserts);
        (store, counter)
    }
}

#[async_trait]
impl DocumentStore for CountingStore {
    async fn insert(&self, collection: &str, document: &Document) -> Result<String, StorageError> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        self.inner.insert(collection, document).await
    }

    async fn find(
        &self,
        collection: &str,
        filter: &Document,
        limit: i64,
    ) -> Result<Vec<Document>, StorageError> {
        self.inner.find(collection, filter, limit).await
    }

    async fn collection_names(&self) -> Result<Vec<String>, StorageError> {
        self.inner.collection_names().await
    }

    async fn ping(&self) -> Result<(), StorageError> {
        self.inner.ping().await
    }
}

/// Store that accepts connections at startup but fails every operation.
///
/// With `reachable` set, `ping` still succeeds so only the data calls fail.
pub struct FaultyStore {
    pub reachable: bool,
}

fn failure() -> StorageError {
    let cause = serde_json::from_str::<Value>("{").unwrap_err();
    StorageError::Serialization(cause)
}

#[async_trait]
impl DocumentStore for FaultyStore {
    async fn insert(&self, _: &str, _: &Document) -> Result<String, StorageError> {
        Err(failure())
    }

    async fn find(&self, _: &str, _: &Document, _: i64) -> Result<Vec<Document>, StorageError> {
        Err(failure())
    }

    async fn collection_names(&self) -> Result<Vec<String>, StorageError> {
        Err(failure())
    }

    async fn ping(&self) -> Result<(), StorageError> {
        if self.reachable {
            Ok(())
        } else {
            Err(failure())
        }
    }
}
