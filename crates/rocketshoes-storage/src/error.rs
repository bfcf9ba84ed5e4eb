//! # Storage Error Types
//!
//! Error types for snapshot storage operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StorageError (this module) ← Adds context and categorization           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CartStore ← A failed write aborts the mutation; the message is         │
//! │              forwarded to the notification channel                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Snapshot storage errors.
///
/// These errors wrap sqlx and serde_json errors and provide additional
/// context for debugging and user feedback.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file doesn't exist and can't be created
    /// - File permissions issue
    /// - Pool already closed
    #[error("storage connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("storage migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("storage query failed: {0}")]
    QueryFailed(String),

    /// A stored snapshot exists but does not parse as a cart.
    ///
    /// ## When This Occurs
    /// - The payload was written by an incompatible version
    /// - The row was edited out-of-band
    ///
    /// Store initialization treats this as "no snapshot" after logging it.
    #[error("stored cart snapshot is corrupt: {0}")]
    Corrupt(String),
}

/// Convert sqlx errors to StorageError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::PoolTimedOut   → StorageError::ConnectionFailed
/// sqlx::Error::PoolClosed     → StorageError::ConnectionFailed
/// Other                       → StorageError::QueryFailed
/// ```
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut => {
                StorageError::ConnectionFailed("connection pool exhausted".to_string())
            }
            sqlx::Error::PoolClosed => {
                StorageError::ConnectionFailed("connection pool is closed".to_string())
            }
            other => StorageError::QueryFailed(other.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for StorageError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        StorageError::MigrationFailed(err.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Corrupt(err.to_string())
    }
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_errors_map_to_connection_failed() {
        let err: StorageError = sqlx::Error::PoolClosed.into();
        assert!(matches!(err, StorageError::ConnectionFailed(_)));

        let err: StorageError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, StorageError::ConnectionFailed(_)));
    }

    #[test]
    fn test_parse_failure_maps_to_corrupt() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: StorageError = parse_err.into();
        assert!(matches!(err, StorageError::Corrupt(_)));
    }
}
