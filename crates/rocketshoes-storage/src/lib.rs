//! # rocketshoes-storage: Durable Cart Snapshot for RocketShoes
//!
//! This crate persists the cart between storefront sessions. It uses SQLite
//! for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      RocketShoes Snapshot Flow                          │
//! │                                                                         │
//! │  CartStore mutation (add/remove/update)                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 rocketshoes-storage (THIS CRATE)                │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌────────────────┐    ┌──────────────┐  │   │
//! │  │   │  CartStorage  │    │   Snapshot     │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │  Repository    │    │  (embedded)  │  │   │
//! │  │   │               │    │ (snapshot.rs)  │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ load / save /  │    │ 001_cart_    │  │   │
//! │  │   │ Connection    │    │ clear          │    │ snapshots.sql│  │   │
//! │  │   │ Management    │    │                │    │              │  │   │
//! │  │   └───────────────┘    └────────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  cart_snapshots table: key → cart serialized as a JSON array            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Storage error types
//! - [`snapshot`] - Snapshot repository (load/save/clear)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rocketshoes_storage::{CartStorage, StorageConfig, CART_SNAPSHOT_KEY};
//!
//! let storage = CartStorage::new(StorageConfig::new("path/to/cart.db")).await?;
//!
//! let snapshot = storage.snapshots().load(CART_SNAPSHOT_KEY).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod snapshot;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StorageError, StorageResult};
pub use pool::{CartStorage, StorageConfig};
pub use snapshot::SnapshotRepository;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Namespaced key the storefront cart is persisted under.
///
/// ## Why Namespaced?
/// The snapshot table is shared client-side storage; the `@RocketShoes:`
/// prefix keeps the cart key from colliding with other storefront features
/// persisting alongside it.
pub const CART_SNAPSHOT_KEY: &str = "@RocketShoes:cart";
