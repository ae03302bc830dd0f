//! Document persistence for the portfolio backend.
//!
//! Records are stored as JSON documents grouped into named collections.
//! The process holds exactly one [`StoreHandle`], created by [`connect`] at
//! startup and injected into the HTTP layer; a handle that never reached a
//! store is a first-class disabled state rather than an absent value.

use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

pub mod error;
pub mod handle;
pub mod memory;
pub mod pg;
pub mod store;

pub use error::StorageError;
pub use handle::{DatabaseStatus, StoreHandle};
pub use memory::MemoryDocumentStore;
pub use pg::PgDocumentStore;
pub use store::{Document, DocumentStore};

pub type DbPool = sqlx::PgPool;

/// URL scheme selecting the in-process store.
pub const MEMORY_SCHEME: &str = "memory://";

/// Where the document store lives. Both values are required to enable
/// persistence.
#[derive(Debug, Clone, Default)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub name: Option<String>,
}

impl DatabaseConfig {
    /// Read `DATABASE_URL` and `DATABASE_NAME`. Empty values count as unset.
    pub fn from_env() -> Self {
        let read = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());
        Self {
            url: read("DATABASE_URL"),
            name: read("DATABASE_NAME"),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.url.is_some() && self.name.is_some()
    }
}

/// Create a connection pool for `database_url`, using `database_name` as the
/// target database.
pub async fn create_pool(database_url: &str, database_name: &str) -> Result<DbPool, sqlx::Error> {
    let options = PgConnectOptions::from_str(database_url)?.database(database_name);
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await
}

/// Round-trip a trivial query to verify the pool can reach the server.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations (creates the `documents` table).
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Establish the process-wide store handle.
///
/// Never fails: missing configuration yields [`StoreHandle::Unconfigured`]
/// and any startup failure yields [`StoreHandle::Unavailable`], so the
/// server can still come up with persistence disabled.
pub async fn connect(config: &DatabaseConfig) -> StoreHandle {
    let (Some(url), Some(name)) = (config.url.as_deref(), config.name.as_deref()) else {
        tracing::warn!(
            database_url_set = config.url.is_some(),
            database_name_set = config.name.is_some(),
            "Database not configured, persistence disabled"
        );
        return StoreHandle::Unconfigured;
    };

    if url.starts_with(MEMORY_SCHEME) {
        tracing::info!(database = %name, "Using in-process document store");
        return StoreHandle::connected(MemoryDocumentStore::new());
    }

    match connect_postgres(url, name).await {
        Ok(pool) => {
            tracing::info!(database = %name, "Document store connected");
            StoreHandle::connected(PgDocumentStore::new(pool))
        }
        Err(e) => {
            tracing::error!(error = %e, database = %name, "Document store unavailable, persistence disabled");
            StoreHandle::Unavailable {
                reason: e.to_string(),
            }
        }
    }
}

async fn connect_postgres(url: &str, name: &str) -> Result<DbPool, StorageError> {
    let pool = create_pool(url, name).await?;
    tracing::debug!("Database connection pool created");

    health_check(&pool).await?;
    tracing::debug!("Database health check passed");

    run_migrations(&pool).await?;
    tracing::debug!("Database migrations applied");

    Ok(pool)
}
