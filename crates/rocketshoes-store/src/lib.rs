//! # RocketShoes Cart Store
//!
//! The cart state manager the storefront UI embeds. This is the main entry
//! point that wires the pure cart logic to its collaborators.
//!
//! ## Module Organization
//! ```text
//! rocketshoes_store/
//! ├── lib.rs          ◄─── You are here (exports & tracing setup)
//! ├── store.rs        ◄─── CartStore: the four cart operations
//! ├── notify.rs       ◄─── Notification channel trait + implementations
//! ├── config.rs       ◄─── Store configuration (env + app-data defaults)
//! └── error.rs        ◄─── Store error type
//! ```
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        CartStore Data Flow                              │
//! │                                                                         │
//! │  UI action                  CartStore                  Collaborators    │
//! │  ─────────                  ─────────                  ─────────────    │
//! │                                                                         │
//! │  "Add to cart" ──────────► add_product(id) ─────────► catalog.stock    │
//! │                                 │                      catalog.product  │
//! │                                 ▼                                       │
//! │                            new Cart value ──────────► snapshots.save   │
//! │                                 │                                       │
//! │                                 ▼                                       │
//! │                            watch channel ───────────► subscribers      │
//! │                                 │                      (cart badge,     │
//! │                                 ▼                       cart page)      │
//! │                            on failure ──────────────► notifier         │
//! │                                                        (toast)          │
//! │                                                                         │
//! │  Mutations never throw at this boundary: failure is reported            │
//! │  exclusively through the notification channel.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod notify;
pub mod store;

use tracing::Level;
use tracing_subscriber::EnvFilter;

pub use config::StoreConfig;
pub use error::StoreError;
pub use notify::{CartNotifier, NoOpNotifier, Severity, TracingNotifier};
pub use store::CartStore;

// Re-export the value types the embedding UI works with
pub use rocketshoes_core::{Cart, CartSummary, Product, Stock};

/// Initializes the tracing subscriber for structured logging.
///
/// For embedding applications that don't configure their own subscriber.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=rocketshoes=trace` - Show trace for rocketshoes crates only
/// - Default: INFO level
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,rocketshoes=debug,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .init();
}
