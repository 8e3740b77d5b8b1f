//! Storage-specific error type wrapping sqlx errors.

use goty_domain::error::GotyError;

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// Failed to (de)serialize the pass-through JSON column.
    #[error("JSON serialization error")]
    Json(#[from] serde_json::Error),

    /// Failed to run migrations.
    #[error("migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A vote counter does not fit the `SQLite` integer range.
    #[error("vote counter out of range")]
    CounterRange(#[from] std::num::TryFromIntError),
}

impl From<StorageError> for GotyError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
