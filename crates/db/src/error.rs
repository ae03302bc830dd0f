/// Failure of a document store operation.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The store was never configured or could not be reached at startup.
    #[error("Database not configured")]
    Disabled,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The record did not serialize to a JSON object.
    #[error("{kind} record is not a JSON object")]
    NotADocument { kind: String },
}

impl StorageError {
    pub fn is_disabled(&self) -> bool {
        matches!(self, StorageError::Disabled)
    }
}
