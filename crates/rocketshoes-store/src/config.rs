//! # Store Configuration
//!
//! Configuration for a fully wired cart store.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`ROCKETSHOES_*`)
//! 2. Defaults (local dev API, platform app-data directory)
//!
//! ## Environment Variables
//! - `ROCKETSHOES_API_URL` - Catalog service base URL
//! - `ROCKETSHOES_DB_PATH` - Snapshot database file
//! - `ROCKETSHOES_CART_KEY` - Snapshot key (namespaced)

use std::path::PathBuf;

use directories::ProjectDirs;
use tracing::debug;

use crate::error::StoreError;
use rocketshoes_catalog::CatalogConfig;
use rocketshoes_storage::{StorageConfig, CART_SNAPSHOT_KEY};

/// Configuration for `CartStore::initialize`.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Catalog service configuration.
    pub catalog: CatalogConfig,

    /// Snapshot storage configuration.
    pub storage: StorageConfig,

    /// Key the cart snapshot is persisted under.
    pub snapshot_key: String,
}

impl StoreConfig {
    /// Creates a configuration from explicit parts.
    pub fn new(catalog: CatalogConfig, storage: StorageConfig) -> Self {
        StoreConfig {
            catalog,
            storage,
            snapshot_key: CART_SNAPSHOT_KEY.to_string(),
        }
    }

    /// Creates a configuration from environment variables and defaults.
    pub fn from_env() -> Result<Self, StoreError> {
        let catalog = CatalogConfig::from_env()?;

        let db_path = match std::env::var("ROCKETSHOES_DB_PATH") {
            Ok(path) => PathBuf::from(path),
            Err(_) => default_db_path()?,
        };
        debug!(path = %db_path.display(), "Snapshot database path determined");

        let snapshot_key =
            std::env::var("ROCKETSHOES_CART_KEY").unwrap_or_else(|_| CART_SNAPSHOT_KEY.to_string());

        Ok(StoreConfig {
            catalog,
            storage: StorageConfig::new(db_path),
            snapshot_key,
        })
    }

    /// Overrides the snapshot key.
    pub fn snapshot_key(mut self, key: impl Into<String>) -> Self {
        self.snapshot_key = key.into();
        self
    }
}

/// Determines the snapshot database path based on the platform.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.rocketshoes.storefront/cart.db`
/// - **Windows**: `%APPDATA%\rocketshoes\storefront\cart.db`
/// - **Linux**: `~/.local/share/storefront/cart.db`
fn default_db_path() -> Result<PathBuf, StoreError> {
    let proj_dirs = ProjectDirs::from("com", "rocketshoes", "storefront")
        .ok_or_else(|| StoreError::Config("could not determine app data directory".to_string()))?;

    let data_dir = proj_dirs.data_dir();

    std::fs::create_dir_all(data_dir)
        .map_err(|e| StoreError::Config(format!("could not create {}: {}", data_dir.display(), e)))?;

    Ok(data_dir.join("cart.db"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_snapshot_key() {
        let config = StoreConfig::new(CatalogConfig::default(), StorageConfig::in_memory());
        assert_eq!(config.snapshot_key, "@RocketShoes:cart");
    }

    #[test]
    fn test_snapshot_key_override() {
        let config = StoreConfig::new(CatalogConfig::default(), StorageConfig::in_memory())
            .snapshot_key("@RocketShoes:cart:test");
        assert_eq!(config.snapshot_key, "@RocketShoes:cart:test");
    }
}
