//! PostgreSQL-backed document store.
//!
//! All collections share the `documents` table; each row keeps its JSON
//! body in a `JSONB` column and `seq` preserves insertion order.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::types::Json;
use uuid::Uuid;

use crate::error::StorageError;
use crate::store::{Document, DocumentStore};
use crate::DbPool;

pub struct PgDocumentStore {
    pool: DbPool,
}

impl PgDocumentStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn insert(&self, collection: &str, document: &Document) -> Result<String, StorageError> {
        let id = Uuid::now_v7();
        sqlx::query("INSERT INTO documents (id, collection, data) VALUES ($1, $2, $3)")
            .bind(id)
            .bind(collection)
            .bind(Json(document))
            .execute(&self.pool)
            .await?;
        Ok(id.to_string())
    }

    async fn find(
        &self,
        collection: &str,
        filter: &Document,
        limit: i64,
    ) -> Result<Vec<Document>, StorageError> {
        let rows: Vec<(Uuid, Json<Document>)> = sqlx::query_as(
            "SELECT id, data FROM documents
             WHERE collection = $1 AND data @> $2
             ORDER BY seq
             LIMIT $3",
        )
        .bind(collection)
        .bind(Json(filter))
        .bind(limit.max(0))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, Json(mut doc))| {
                doc.insert("id".into(), Value::String(id.to_string()));
                doc
            })
            .collect())
    }

    async fn collection_names(&self) -> Result<Vec<String>, StorageError> {
        let names = sqlx::query_scalar::<_, String>(
            "SELECT DISTINCT collection FROM documents ORDER BY collection",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(names)
    }

    async fn ping(&self) -> Result<(), StorageError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}
