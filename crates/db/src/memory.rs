//! In-process document store, selected with `DATABASE_URL=memory://…`.
//!
//! Mirrors the PostgreSQL store: UUIDv7 ids, insertion order, and JSON
//! containment for filters. Contents are lost on restart.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::StorageError;
use crate::store::{Document, DocumentStore};

#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<BTreeMap<String, Vec<(String, Document)>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn insert(&self, collection: &str, document: &Document) -> Result<String, StorageError> {
        let id = Uuid::now_v7().to_string();
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push((id.clone(), document.clone()));
        Ok(id)
    }

    async fn find(
        &self,
        collection: &str,
        filter: &Document,
        limit: i64,
    ) -> Result<Vec<Document>, StorageError> {
        let limit = usize::try_from(limit).unwrap_or(0);
        let collections = self.collections.read().await;
        let Some(docs) = collections.get(collection) else {
            return Ok(Vec::new());
        };

        Ok(docs
            .iter()
            .filter(|(_, doc)| contains_object(doc, filter))
            .take(limit)
            .map(|(id, doc)| {
                let mut doc = doc.clone();
                doc.insert("id".into(), Value::String(id.clone()));
                doc
            })
            .collect())
    }

    async fn collection_names(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.collections.read().await.keys().cloned().collect())
    }

    async fn ping(&self) -> Result<(), StorageError> {
        Ok(())
    }
}

fn contains_object(doc: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, expected)| doc.get(key).is_some_and(|v| contains(v, expected)))
}

/// JSON containment, matching PostgreSQL's `jsonb @> jsonb`.
fn contains(value: &Value, expected: &Value) -> bool {
    match (value, expected) {
        (Value::Object(doc), Value::Object(filter)) => contains_object(doc, filter),
        (Value::Array(items), Value::Array(wanted)) => wanted
            .iter()
            .all(|w| items.iter().any(|item| contains(item, w))),
        (Value::Array(items), scalar) if !scalar.is_object() => {
            items.iter().any(|item| item == scalar)
        }
        _ => value == expected,
    }
}
