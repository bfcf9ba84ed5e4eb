//! # Store Error Type
//!
//! Aggregated error type for cart operations.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Cart Store                         │
//! │                                                                         │
//! │  CoreError / CatalogError / StorageError                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this file, transparent wrappers)                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CartStore operation matches on the kind:                               │
//! │    • catalog not-found   → fixed storefront message                     │
//! │    • out of stock        → fixed storefront message                     │
//! │    • not in cart         → fixed storefront message                     │
//! │    • everything else     → the error's own message, verbatim            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Notification channel (nothing is re-thrown to the UI)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The wrappers are `#[error(transparent)]` so the verbatim path reproduces
//! the underlying message exactly, without a "store error:" prefix.

use thiserror::Error;

use rocketshoes_catalog::CatalogError;
use rocketshoes_core::CoreError;
use rocketshoes_storage::StorageError;

/// Errors raised inside cart operations.
///
/// Only construction (`initialize`/`open`) surfaces these to the caller;
/// the mutating operations convert them into notifications.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A cart rule was violated (out of stock, not in cart).
    #[error(transparent)]
    Cart(#[from] CoreError),

    /// A catalog lookup failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Reading or writing the persisted snapshot failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The store configuration is unusable.
    #[error("store configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transparent_wrappers_keep_messages_verbatim() {
        let err: StoreError = CatalogError::RequestFailed("connection reset by peer".into()).into();
        assert_eq!(
            err.to_string(),
            "catalog request failed: connection reset by peer"
        );

        let err: StoreError = StorageError::ConnectionFailed("connection pool is closed".into()).into();
        assert_eq!(
            err.to_string(),
            "storage connection failed: connection pool is closed"
        );
    }
}
