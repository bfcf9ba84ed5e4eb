//! # Storage Pool Management
//!
//! Connection pool creation and configuration for the snapshot database.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Snapshot Connection Pool                           │
//! │                                                                         │
//! │  Store Initialization                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StorageConfig::new(path) ← Configure pool settings                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CartStorage::new(config).await ← Create pool + run migrations          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                            │
//! │  │            SqlitePool                   │                            │
//! │  │  ┌─────┐ ┌─────┐ ┌─────┐                │  (max_connections)         │
//! │  │  │Conn1│ │Conn2│ │Conn3│ ...            │                            │
//! │  │  └─────┘ └─────┘ └─────┘                │                            │
//! │  └─────────────────────────────────────────┘                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SnapshotRepository ──► load / save / clear                             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## WAL Mode
//! SQLite WAL (Write-Ahead Logging) mode is enabled for:
//! - Better concurrent read performance
//! - Readers don't block writers
//! - Better crash recovery

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{StorageError, StorageResult};
use crate::migrations;
use crate::snapshot::SnapshotRepository;

// =============================================================================
// Configuration
// =============================================================================

/// Snapshot storage configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = StorageConfig::new("/path/to/cart.db")
///     .max_connections(5)
///     .min_connections(1);
/// ```
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Path to the SQLite database file.
    pub database_path: PathBuf,

    /// Maximum number of connections in the pool.
    /// Default: 5 (a storefront session is mostly single-writer)
    pub max_connections: u32,

    /// Minimum number of connections to keep alive.
    /// Default: 1
    pub min_connections: u32,

    /// Connection timeout duration.
    /// Default: 30 seconds
    pub connect_timeout: Duration,

    /// Idle timeout before closing a connection.
    /// Default: 10 minutes
    pub idle_timeout: Duration,

    /// Whether to run migrations on connect.
    /// Default: true
    pub run_migrations: bool,
}

impl StorageConfig {
    /// Creates a new storage configuration with the given path.
    ///
    /// ## Arguments
    /// * `path` - Path to the SQLite database file. Created if it doesn't exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        StorageConfig {
            database_path: path.into(),
            max_connections: 5,
            min_connections: 1,
            connect_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
            run_migrations: true,
        }
    }

    /// Sets the maximum number of connections.
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Sets the minimum number of connections.
    pub fn min_connections(mut self, min: u32) -> Self {
        self.min_connections = min;
        self
    }

    /// Sets the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets whether to run migrations on connect.
    pub fn run_migrations(mut self, run: bool) -> Self {
        self.run_migrations = run;
        self
    }

    /// Creates an in-memory database configuration (for testing).
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let storage = CartStorage::new(StorageConfig::in_memory()).await?;
    /// // Database is isolated, perfect for tests
    /// ```
    pub fn in_memory() -> Self {
        StorageConfig {
            database_path: PathBuf::from(":memory:"),
            max_connections: 1, // In-memory requires single connection
            min_connections: 1,
            connect_timeout: Duration::from_secs(5),
            idle_timeout: Duration::from_secs(60),
            run_migrations: true,
        }
    }
}

// =============================================================================
// Cart Storage
// =============================================================================

/// Main storage handle providing snapshot repository access.
///
/// ## Usage
/// ```rust,ignore
/// let storage = CartStorage::new(StorageConfig::new("./cart.db")).await?;
/// let snapshot = storage.snapshots().load(CART_SNAPSHOT_KEY).await?;
/// ```
#[derive(Debug, Clone)]
pub struct CartStorage {
    /// The SQLite connection pool.
    pool: SqlitePool,
}

impl CartStorage {
    /// Creates a new snapshot storage pool.
    ///
    /// ## What This Does
    /// 1. Creates the database file if it doesn't exist
    /// 2. Configures SQLite:
    ///    - WAL mode for concurrent reads
    ///    - NORMAL synchronous (balance of safety/speed)
    ///    - Foreign keys enabled
    /// 3. Creates the connection pool
    /// 4. Runs migrations (if enabled)
    pub async fn new(config: StorageConfig) -> StorageResult<Self> {
        info!(
            path = %config.database_path.display(),
            "Initializing snapshot storage"
        );

        // ":memory:" is special-cased by SQLite; everything else is a file
        // path which is created on first connect (mode=rwc)
        let connect_url = if config.database_path == Path::new(":memory:") {
            "sqlite::memory:".to_string()
        } else {
            format!("sqlite://{}?mode=rwc", config.database_path.display())
        };

        let connect_options = SqliteConnectOptions::from_str(&connect_url)
            .map_err(|e| StorageError::ConnectionFailed(e.to_string()))?
            // WAL mode: Better concurrent read performance
            .journal_mode(SqliteJournalMode::Wal)
            // NORMAL synchronous: Good balance of durability and speed
            .synchronous(SqliteSynchronous::Normal)
            // Enable foreign key constraints
            .foreign_keys(true)
            // Create file if it doesn't exist
            .create_if_missing(true);

        debug!("Connection options configured");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(config.connect_timeout)
            .idle_timeout(Some(config.idle_timeout))
            .connect_with(connect_options)
            .await
            .map_err(|e| StorageError::ConnectionFailed(e.to_string()))?;

        info!(
            max_connections = config.max_connections,
            "Snapshot storage pool created"
        );

        let storage = CartStorage { pool };

        if config.run_migrations {
            storage.run_migrations().await?;
        }

        Ok(storage)
    }

    /// Runs database migrations.
    ///
    /// Automatically called by `new()` unless disabled in the config.
    pub async fn run_migrations(&self) -> StorageResult<()> {
        info!("Running storage migrations");
        migrations::run_migrations(&self.pool).await?;
        info!("Migrations complete");
        Ok(())
    }

    /// Returns a reference to the connection pool.
    ///
    /// For diagnostics and tests; prefer the snapshot repository.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Returns the snapshot repository.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let cart = storage.snapshots().load(CART_SNAPSHOT_KEY).await?;
    /// ```
    pub fn snapshots(&self) -> SnapshotRepository {
        SnapshotRepository::new(self.pool.clone())
    }

    /// Closes the connection pool.
    ///
    /// After calling close, all snapshot operations will fail.
    pub async fn close(&self) {
        info!("Closing snapshot storage pool");
        self.pool.close().await;
    }

    /// Checks if the storage is healthy (can execute queries).
    pub async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_storage() {
        let storage = CartStorage::new(StorageConfig::in_memory()).await.unwrap();

        assert!(storage.health_check().await);

        let (total, applied) = migrations::migration_status(storage.pool()).await.unwrap();
        assert_eq!(total, applied);
    }

    #[tokio::test]
    async fn test_closed_pool_fails_health_check() {
        let storage = CartStorage::new(StorageConfig::in_memory()).await.unwrap();
        storage.close().await;
        assert!(!storage.health_check().await);
    }

    #[test]
    fn test_config_builder() {
        let config = StorageConfig::new("/tmp/cart.db")
            .max_connections(10)
            .min_connections(2);

        assert_eq!(config.max_connections, 10);
        assert_eq!(config.min_connections, 2);
    }
}
