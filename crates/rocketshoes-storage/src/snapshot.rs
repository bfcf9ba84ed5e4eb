//! # Snapshot Repository
//!
//! Database operations for the persisted cart snapshot.
//!
//! ## Key Operations
//! - Load the snapshot at store initialization
//! - Overwrite it wholesale on every successful mutation
//! - Clear it (the cart lifecycle ends when its snapshot is gone)
//!
//! ## Snapshot Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     cart_snapshots table                                │
//! │                                                                         │
//! │  key                  payload                        updated_at         │
//! │  ───                  ───────                        ──────────         │
//! │  @RocketShoes:cart    [{"id":1,"title":"Fly Knit     2024-06-01T...     │
//! │                        Runner","price":179.9,...,                       │
//! │                        "amount":2}, ...]                                │
//! │                                                                         │
//! │  The payload is the cart serialized as a JSON array of products;        │
//! │  exactly the value the UI layer consumes. One row per key; a save       │
//! │  replaces the whole row.                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{StorageError, StorageResult};
use rocketshoes_core::Cart;

/// Repository for cart snapshot operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = storage.snapshots();
///
/// repo.save(CART_SNAPSHOT_KEY, &cart).await?;
/// let restored = repo.load(CART_SNAPSHOT_KEY).await?;
/// ```
#[derive(Debug, Clone)]
pub struct SnapshotRepository {
    pool: SqlitePool,
}

impl SnapshotRepository {
    /// Creates a new SnapshotRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SnapshotRepository { pool }
    }

    /// Loads the cart persisted under `key`.
    ///
    /// ## Returns
    /// * `Ok(Some(Cart))` - Snapshot present and parsed
    /// * `Ok(None)` - No snapshot under this key
    /// * `Err(StorageError::Corrupt)` - Snapshot present but unparseable
    pub async fn load(&self, key: &str) -> StorageResult<Option<Cart>> {
        debug!(key = %key, "Loading cart snapshot");

        let payload: Option<String> =
            sqlx::query_scalar("SELECT payload FROM cart_snapshots WHERE key = ?1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;

        match payload {
            Some(raw) => {
                let cart: Cart = serde_json::from_str(&raw)
                    .map_err(|e| StorageError::Corrupt(e.to_string()))?;
                debug!(key = %key, items = cart.item_count(), "Snapshot loaded");
                Ok(Some(cart))
            }
            None => Ok(None),
        }
    }

    /// Persists `cart` under `key`, replacing any previous snapshot.
    ///
    /// The whole payload is overwritten on every call; there is no partial
    /// update of a snapshot.
    pub async fn save(&self, key: &str, cart: &Cart) -> StorageResult<()> {
        let payload = serde_json::to_string(cart)
            .map_err(|e| StorageError::QueryFailed(e.to_string()))?;
        let now = Utc::now();

        debug!(key = %key, items = cart.item_count(), "Saving cart snapshot");

        sqlx::query(
            r#"
            INSERT INTO cart_snapshots (key, payload, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                payload = excluded.payload,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(payload)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Deletes the snapshot under `key`, if any.
    ///
    /// The next store initialization from this storage starts with an empty
    /// cart.
    pub async fn clear(&self, key: &str) -> StorageResult<()> {
        debug!(key = %key, "Clearing cart snapshot");

        sqlx::query("DELETE FROM cart_snapshots WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Returns the raw stored payload under `key` without parsing it.
    ///
    /// For diagnostics and tests that assert on the persisted wire format.
    pub async fn raw_payload(&self, key: &str) -> StorageResult<Option<String>> {
        let payload = sqlx::query_scalar("SELECT payload FROM cart_snapshots WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(payload)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{CartStorage, StorageConfig};
    use crate::CART_SNAPSHOT_KEY;
    use rocketshoes_core::Product;

    async fn storage() -> CartStorage {
        CartStorage::new(StorageConfig::in_memory()).await.unwrap()
    }

    fn sample_cart() -> Cart {
        Cart::new()
            .append(Product {
                id: 1,
                title: "Fly Knit Runner".to_string(),
                price: 179.9,
                image: "https://cdn.rocketshoes.dev/fly-knit.jpg".to_string(),
                amount: 0,
            })
            .append(Product {
                id: 2,
                title: "Court Classic".to_string(),
                price: 139.9,
                image: "https://cdn.rocketshoes.dev/court.jpg".to_string(),
                amount: 0,
            })
    }

    #[tokio::test]
    async fn test_load_missing_key_is_none() {
        let repo = storage().await.snapshots();
        assert!(repo.load(CART_SNAPSHOT_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_then_load_roundtrip() {
        let repo = storage().await.snapshots();
        let cart = sample_cart();

        repo.save(CART_SNAPSHOT_KEY, &cart).await.unwrap();
        let restored = repo.load(CART_SNAPSHOT_KEY).await.unwrap().unwrap();

        assert_eq!(restored, cart);
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_snapshot() {
        let repo = storage().await.snapshots();
        let first = sample_cart();
        let second = first.remove(1).unwrap();

        repo.save(CART_SNAPSHOT_KEY, &first).await.unwrap();
        repo.save(CART_SNAPSHOT_KEY, &second).await.unwrap();

        let restored = repo.load(CART_SNAPSHOT_KEY).await.unwrap().unwrap();
        assert_eq!(restored, second);
        assert_eq!(restored.item_count(), 1);
    }

    #[tokio::test]
    async fn test_payload_is_a_json_array() {
        let repo = storage().await.snapshots();
        repo.save(CART_SNAPSHOT_KEY, &sample_cart()).await.unwrap();

        let raw = repo.raw_payload(CART_SNAPSHOT_KEY).await.unwrap().unwrap();
        assert!(raw.starts_with('['));
        assert!(raw.contains("\"title\":\"Fly Knit Runner\""));
    }

    #[tokio::test]
    async fn test_corrupt_payload_is_reported() {
        let store = storage().await;
        let repo = store.snapshots();

        sqlx::query("INSERT INTO cart_snapshots (key, payload, updated_at) VALUES (?1, ?2, ?3)")
            .bind(CART_SNAPSHOT_KEY)
            .bind("{definitely not a cart")
            .bind(Utc::now())
            .execute(store.pool())
            .await
            .unwrap();

        let err = repo.load(CART_SNAPSHOT_KEY).await.unwrap_err();
        assert!(matches!(err, StorageError::Corrupt(_)));
    }

    #[tokio::test]
    async fn test_clear_removes_snapshot() {
        let repo = storage().await.snapshots();
        repo.save(CART_SNAPSHOT_KEY, &sample_cart()).await.unwrap();

        repo.clear(CART_SNAPSHOT_KEY).await.unwrap();

        assert!(repo.load(CART_SNAPSHOT_KEY).await.unwrap().is_none());
    }
}
