use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::StorageError;

/// A stored record: a JSON object keyed by field name.
pub type Document = Map<String, Value>;

/// Backend of the document store.
///
/// Implementations perform each call exactly once; there is no retry or
/// buffering, and a successful insert is visible to the next `find`.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert `document` into `collection` and return its generated id.
    async fn insert(&self, collection: &str, document: &Document) -> Result<String, StorageError>;

    /// Up to `limit` documents of `collection` containing every key/value of
    /// `filter`, in insertion order. Returned documents carry their `id`.
    ///
    /// An unknown collection yields an empty list.
    async fn find(
        &self,
        collection: &str,
        filter: &Document,
        limit: i64,
    ) -> Result<Vec<Document>, StorageError>;

    /// Names of the collections currently holding documents, sorted.
    async fn collection_names(&self) -> Result<Vec<String>, StorageError>;

    /// Verify the backend is reachable.
    async fn ping(&self) -> Result<(), StorageError>;
}
