//! The process-wide store handle and its disabled states.

use std::fmt;
use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use folio_core::limits::truncate_chars;
use serde::Serialize;
use serde_json::Value;

use crate::error::StorageError;
use crate::store::{Document, DocumentStore};

/// Maximum number of collection names reported by [`StoreHandle::probe`].
pub const MAX_REPORTED_COLLECTIONS: usize = 10;

/// Maximum length of an error message embedded in a [`DatabaseStatus`].
pub const STATUS_MESSAGE_LENGTH: usize = 50;

/// Access to the document store, established once at startup.
///
/// Cheaply cloneable. The two disabled variants short-circuit every
/// operation with [`StorageError::Disabled`] instead of attempting a call.
#[derive(Clone)]
pub enum StoreHandle {
    /// `DATABASE_URL` or `DATABASE_NAME` was not set.
    Unconfigured,
    /// Configured, but the store could not be reached at startup.
    Unavailable { reason: String },
    Connected(Arc<dyn DocumentStore>),
}

impl fmt::Debug for StoreHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreHandle::Unconfigured => f.write_str("Unconfigured"),
            StoreHandle::Unavailable { reason } => f
                .debug_struct("Unavailable")
                .field("reason", reason)
                .finish(),
            StoreHandle::Connected(_) => f.write_str("Connected"),
        }
    }
}

impl StoreHandle {
    pub fn connected(store: impl DocumentStore + 'static) -> Self {
        StoreHandle::Connected(Arc::new(store))
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, StoreHandle::Connected(_))
    }

    fn store(&self) -> Result<&Arc<dyn DocumentStore>, StorageError> {
        match self {
            StoreHandle::Connected(store) => Ok(store),
            StoreHandle::Unconfigured | StoreHandle::Unavailable { .. } => {
                Err(StorageError::Disabled)
            }
        }
    }

    /// Serialize `record`, stamp `created_at`/`updated_at` and insert it into
    /// the `kind` collection. Returns the generated id.
    ///
    /// Attempted exactly once; a failure is returned to the caller as-is.
    pub async fn create_document<T: Serialize + ?Sized>(
        &self,
        kind: &str,
        record: &T,
    ) -> Result<String, StorageError> {
        let store = self.store()?;

        let Value::Object(mut doc) = serde_json::to_value(record)? else {
            return Err(StorageError::NotADocument {
                kind: kind.to_string(),
            });
        };
        let now = Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true));
        doc.insert("created_at".into(), now.clone());
        doc.insert("updated_at".into(), now);

        let id = store.insert(kind, &doc).await?;
        tracing::debug!(collection = kind, %id, "Document created");
        Ok(id)
    }

    /// Up to `limit` documents of the `kind` collection matching `filter`
    /// (empty filter matches all), in storage order.
    pub async fn get_documents(
        &self,
        kind: &str,
        filter: &Document,
        limit: i64,
    ) -> Result<Vec<Document>, StorageError> {
        self.store()?.find(kind, filter, limit).await
    }

    /// Read path that never fails: a disabled store or any storage error
    /// collapses to an empty list.
    pub async fn get_documents_or_empty(
        &self,
        kind: &str,
        filter: &Document,
        limit: i64,
    ) -> Vec<Document> {
        match self.get_documents(kind, filter, limit).await {
            Ok(docs) => docs,
            Err(StorageError::Disabled) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, collection = kind, "Read failed, returning empty result");
                Vec::new()
            }
        }
    }

    /// Report the store's state without ever failing.
    pub async fn probe(&self) -> DatabaseStatus {
        let store = match self {
            StoreHandle::Unconfigured => return DatabaseStatus::NotAvailable,
            StoreHandle::Unavailable { .. } => return DatabaseStatus::NotInitialized,
            StoreHandle::Connected(store) => store,
        };

        if let Err(e) = store.ping().await {
            return DatabaseStatus::Error(truncate_chars(&e.to_string(), STATUS_MESSAGE_LENGTH));
        }

        match store.collection_names().await {
            Ok(mut collections) => {
                collections.truncate(MAX_REPORTED_COLLECTIONS);
                DatabaseStatus::Connected { collections }
            }
            Err(e) => DatabaseStatus::ConnectedWithError(truncate_chars(
                &e.to_string(),
                STATUS_MESSAGE_LENGTH,
            )),
        }
    }
}

/// Outcome of [`StoreHandle::probe`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseStatus {
    /// No database was configured.
    NotAvailable,
    /// Configured, but startup could not connect.
    NotInitialized,
    Connected { collections: Vec<String> },
    /// Reachable, but listing collections failed.
    ConnectedWithError(String),
    /// The store stopped answering.
    Error(String),
}

impl DatabaseStatus {
    pub fn is_connected(&self) -> bool {
        matches!(
            self,
            DatabaseStatus::Connected { .. } | DatabaseStatus::ConnectedWithError(_)
        )
    }

    pub fn collections(&self) -> &[String] {
        match self {
            DatabaseStatus::Connected { collections } => collections,
            _ => &[],
        }
    }
}

impl fmt::Display for DatabaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseStatus::NotAvailable => f.write_str("Not Available"),
            DatabaseStatus::NotInitialized => f.write_str("Available but not initialized"),
            DatabaseStatus::Connected { .. } => f.write_str("Connected & Working"),
            DatabaseStatus::ConnectedWithError(msg) => write!(f, "Connected but Error: {msg}"),
            DatabaseStatus::Error(msg) => write!(f, "Error: {msg}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use async_trait::async_trait;
    use serde_json::json;

    use crate::memory::MemoryDocumentStore;

    /// Reachable store whose listing call fails.
    struct BrokenListing;

    #[async_trait]
    impl DocumentStore for BrokenListing {
        async fn insert(&self, _: &str, _: &Document) -> Result<String, StorageError> {
            Err(StorageError::Database(sqlx::Error::PoolClosed))
        }
        async fn find(&self, _: &str, _: &Document, _: i64) -> Result<Vec<Document>, StorageError> {
            Err(StorageError::Database(sqlx::Error::PoolTimedOut))
        }
        async fn collection_names(&self) -> Result<Vec<String>, StorageError> {
            Err(StorageError::Database(sqlx::Error::Protocol(
                "listing collections is not permitted for this role".into(),
            )))
        }
        async fn ping(&self) -> Result<(), StorageError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn disabled_handle_short_circuits() {
        for handle in [
            StoreHandle::Unconfigured,
            StoreHandle::Unavailable {
                reason: "refused".into(),
            },
        ] {
            assert!(!handle.is_enabled());
            assert_matches!(
                handle.create_document("inquiry", &json!({ "a": 1 })).await,
                Err(StorageError::Disabled)
            );
            assert_matches!(
                handle.get_documents("project", &Document::new(), 9).await,
                Err(StorageError::Disabled)
            );
            assert!(handle
                .get_documents_or_empty("project", &Document::new(), 9)
                .await
                .is_empty());
        }
    }

    #[tokio::test]
    async fn create_document_stamps_timestamps() {
        let handle = StoreHandle::connected(MemoryDocumentStore::new());
        let id = handle
            .create_document("inquiry", &json!({ "name": "Jane" }))
            .await
            .unwrap();

        let docs = handle
            .get_documents("inquiry", &Document::new(), 10)
            .await
            .unwrap();
        assert_eq!(docs.len(), 1);
        assert_eq!(docs[0]["id"], json!(id));
        assert_eq!(docs[0]["name"], "Jane");
        assert!(docs[0]["created_at"].is_string());
        assert_eq!(docs[0]["created_at"], docs[0]["updated_at"]);
    }

    #[tokio::test]
    async fn create_document_rejects_non_objects() {
        let handle = StoreHandle::connected(MemoryDocumentStore::new());
        assert_matches!(
            handle.create_document("inquiry", &json!(["not", "an", "object"])).await,
            Err(StorageError::NotADocument { kind }) if kind == "inquiry"
        );
    }

    #[tokio::test]
    async fn read_errors_collapse_to_empty() {
        let handle = StoreHandle::connected(BrokenListing);
        assert!(handle.get_documents("project", &Document::new(), 9).await.is_err());
        assert!(handle
            .get_documents_or_empty("project", &Document::new(), 9)
            .await
            .is_empty());
    }

    #[tokio::test]
    async fn probe_reports_each_state() {
        assert_eq!(StoreHandle::Unconfigured.probe().await, DatabaseStatus::NotAvailable);
        assert_eq!(
            StoreHandle::Unavailable {
                reason: "refused".into()
            }
            .probe()
            .await,
            DatabaseStatus::NotInitialized
        );

        let memory = StoreHandle::connected(MemoryDocumentStore::new());
        for i in 0..12 {
            memory
                .create_document(&format!("c{i:02}"), &json!({}))
                .await
                .unwrap();
        }
        let status = memory.probe().await;
        assert!(status.is_connected());
        assert_eq!(status.collections().len(), MAX_REPORTED_COLLECTIONS);
        assert_eq!(status.to_string(), "Connected & Working");

        let broken = StoreHandle::connected(BrokenListing).probe().await;
        assert_matches!(&broken, DatabaseStatus::ConnectedWithError(msg) if msg.chars().count() <= STATUS_MESSAGE_LENGTH);
        assert!(broken.to_string().starts_with("Connected but Error: "));
        assert!(broken.collections().is_empty());
    }
}
