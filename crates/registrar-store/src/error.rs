//! Error types for registrar storage.

use registrar_core::AdminError;

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur in storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The database rejected a statement.
    ///
    /// For constraint and type errors this is the database's own message,
    /// e.g. `UNIQUE constraint failed: AccountType.Name`.
    #[error("{0}")]
    Database(String),

    /// The database could not be opened or reached.
    #[error("connection error: {0}")]
    Connection(String),

    /// Applying the schema migrations failed.
    #[error("migration error: {0}")]
    Migration(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db) => Self::Database(db.message().to_string()),
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed => Self::Connection(err.to_string()),
            other => Self::Database(other.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for StoreError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        Self::Migration(err.to_string())
    }
}

impl From<StoreError> for AdminError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Database(message) => Self::Rejected(message),
            other => Self::Rejected(other.to_string()),
        }
    }
}
