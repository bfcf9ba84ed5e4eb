//! # Cart Store
//!
//! The four cart operations, wired to stock checks, persistence, and
//! publication.
//!
//! ## Operation Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Anatomy of a Cart Mutation                           │
//! │                                                                         │
//! │  add_product / remove_product / update_product_amount                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  1. Acquire the store mutex (mutations are serialized, fetch included)  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  2. Fetch stock (add/update only; remove is local)                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  3. Compute the NEW cart value from the old one (pure, in core)         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  4. Persist the new value ── write fails? ──► abort: memory and         │
//! │       │                                       subscribers keep the      │
//! │       ▼                                       old value                  │
//! │  5. Swap it in and publish to the watch channel                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  6. On any failure: one notification, nothing re-thrown                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why a Mutex Across the Fetch
//! Two in-flight mutations for the same product must not both read the same
//! pre-mutation cart; the second would silently discard the first on
//! completion. Holding the store mutex for the whole operation (stock fetch
//! included) makes the second caller wait and observe the first's result.

use std::sync::Arc;

use tokio::sync::{watch, Mutex};
use tracing::{debug, error, info, warn};

use crate::config::StoreConfig;
use crate::error::StoreError;
use crate::notify::{CartNotifier, Severity};
use rocketshoes_catalog::{Catalog, CatalogClient};
use rocketshoes_core::{Cart, CartSummary, CoreError};
use rocketshoes_storage::{CartStorage, SnapshotRepository, StorageError};

// =============================================================================
// Storefront Messages
// =============================================================================
// The fixed user-facing strings for the known failure kinds. Everything else
// reaches the notification channel as the underlying error's own message.

const MSG_ADD_FAILED: &str = "failed to add product";
const MSG_REMOVE_FAILED: &str = "failed to remove product";
const MSG_UPDATE_FAILED: &str = "failed to change product quantity";
const MSG_OUT_OF_STOCK: &str = "requested quantity unavailable in stock";

// =============================================================================
// Cart Store
// =============================================================================

/// The cart state manager.
///
/// Owns the current cart value, validates mutations against remote stock,
/// persists every new value, and publishes it to subscribers. Mutating
/// operations never fail at this boundary: errors become notifications.
pub struct CartStore {
    /// Authoritative cart value. The mutex also serializes mutations.
    current: Mutex<Cart>,

    /// Publication channel; holds the last committed cart value.
    cart_tx: watch::Sender<Cart>,

    /// Remote catalog/stock client.
    catalog: Arc<dyn Catalog>,

    /// Persisted snapshot access.
    snapshots: SnapshotRepository,

    /// Key the snapshot is stored under.
    snapshot_key: String,

    /// User-facing message sink.
    notifier: Arc<dyn CartNotifier>,
}

impl CartStore {
    /// Builds a fully wired store from configuration.
    ///
    /// Constructs the catalog client and the storage backend, then delegates
    /// to [`CartStore::open`].
    pub async fn initialize(
        config: StoreConfig,
        notifier: Arc<dyn CartNotifier>,
    ) -> Result<Self, StoreError> {
        let catalog = CatalogClient::new(&config.catalog)?;
        let storage = CartStorage::new(config.storage).await?;
        CartStore::open(&storage, Arc::new(catalog), notifier, config.snapshot_key).await
    }

    /// Opens a store over explicit collaborators.
    ///
    /// ## Startup Behavior
    /// Reads the persisted snapshot once: adopted when present and parseable,
    /// otherwise the cart starts empty (a corrupt snapshot is logged and
    /// discarded). No network calls happen here.
    pub async fn open(
        storage: &CartStorage,
        catalog: Arc<dyn Catalog>,
        notifier: Arc<dyn CartNotifier>,
        snapshot_key: impl Into<String>,
    ) -> Result<Self, StoreError> {
        let snapshot_key = snapshot_key.into();
        let snapshots = storage.snapshots();

        let initial = match snapshots.load(&snapshot_key).await {
            Ok(Some(cart)) => {
                info!(items = cart.item_count(), "Adopted persisted cart snapshot");
                cart
            }
            Ok(None) => {
                info!("No persisted cart snapshot; starting empty");
                Cart::new()
            }
            Err(StorageError::Corrupt(reason)) => {
                warn!(%reason, "Discarding corrupt cart snapshot; starting empty");
                Cart::new()
            }
            Err(other) => return Err(other.into()),
        };

        let (cart_tx, _) = watch::channel(initial.clone());

        Ok(CartStore {
            current: Mutex::new(initial),
            cart_tx,
            catalog,
            snapshots,
            snapshot_key,
            notifier,
        })
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Returns the current cart value.
    ///
    /// No side effects, never fails. Reads observe the last committed value
    /// and never wait on an in-flight mutation.
    pub fn cart(&self) -> Cart {
        self.cart_tx.borrow().clone()
    }

    /// Returns cart totals for the UI layer.
    pub fn summary(&self) -> CartSummary {
        CartSummary::from(&*self.cart_tx.borrow())
    }

    /// Subscribes to cart updates.
    ///
    /// The receiver yields every committed cart value; the UI layer drives
    /// its badge and cart page from this.
    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.cart_tx.subscribe()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Adds one unit of a product to the cart.
    ///
    /// ## Behavior
    /// - Product already in the cart: its amount is incremented, unless it
    ///   has reached the available stock
    /// - Product not in the cart: metadata is fetched and a new entry is
    ///   appended at amount 1
    ///
    /// ## Notifications
    /// - Unknown product (404): "failed to add product"
    /// - Stock ceiling reached: "requested quantity unavailable in stock"
    /// - Anything else: the underlying error's message
    pub async fn add_product(&self, product_id: u64) {
        debug!(product_id, "add_product");

        let result = {
            let mut cart = self.current.lock().await;
            self.try_add(&mut cart, product_id).await
        };

        match result {
            Ok(()) => {}
            Err(StoreError::Catalog(err)) if err.is_not_found() => {
                warn!(product_id, %err, "add_product: unknown product");
                self.notifier.notify(Severity::Error, MSG_ADD_FAILED);
            }
            Err(StoreError::Cart(err @ CoreError::OutOfStock { .. })) => {
                warn!(product_id, %err, "add_product: out of stock");
                self.notifier.notify(Severity::Error, MSG_OUT_OF_STOCK);
            }
            Err(err) => {
                error!(product_id, %err, "add_product failed");
                self.notifier.notify(Severity::Error, &err.to_string());
            }
        }
    }

    async fn try_add(&self, cart: &mut Cart, product_id: u64) -> Result<(), StoreError> {
        let stock = self.catalog.stock(product_id).await?;

        let next = if cart.contains(product_id) {
            cart.increment(product_id, stock.amount)?
        } else {
            let product = self.catalog.product(product_id).await?;
            cart.append(product)
        };

        self.commit(cart, next).await
    }

    /// Removes a product from the cart. No network calls.
    ///
    /// ## Notifications
    /// - Product not in the cart: "failed to remove product"
    /// - Anything else (snapshot write): the underlying error's message
    pub async fn remove_product(&self, product_id: u64) {
        debug!(product_id, "remove_product");

        let result = {
            let mut cart = self.current.lock().await;
            match cart.remove(product_id) {
                Ok(next) => self.commit(&mut cart, next).await,
                Err(err) => Err(err.into()),
            }
        };

        match result {
            Ok(()) => {}
            Err(StoreError::Cart(err @ CoreError::ProductNotInCart(_))) => {
                warn!(product_id, %err, "remove_product: not in cart");
                self.notifier.notify(Severity::Error, MSG_REMOVE_FAILED);
            }
            Err(err) => {
                error!(product_id, %err, "remove_product failed");
                self.notifier.notify(Severity::Error, &err.to_string());
            }
        }
    }

    /// Sets a product's cart amount.
    ///
    /// ## Behavior
    /// - `amount <= 0` is a silent no-op (intentional early-exit, not an
    ///   error: quantity steppers in the UI clamp at 1)
    /// - The requested amount is validated against current stock
    /// - When no entry matches, the cart is unchanged but still re-persisted
    ///
    /// ## Notifications
    /// - Unknown product (404): "failed to change product quantity"
    /// - Amount above stock: "requested quantity unavailable in stock"
    /// - Anything else: the underlying error's message
    pub async fn update_product_amount(&self, product_id: u64, amount: i64) {
        debug!(product_id, amount, "update_product_amount");

        if amount <= 0 {
            debug!(product_id, amount, "ignoring non-positive amount");
            return;
        }

        let result = {
            let mut cart = self.current.lock().await;
            self.try_update(&mut cart, product_id, amount).await
        };

        match result {
            Ok(()) => {}
            Err(StoreError::Catalog(err)) if err.is_not_found() => {
                warn!(product_id, %err, "update_product_amount: unknown product");
                self.notifier.notify(Severity::Error, MSG_UPDATE_FAILED);
            }
            Err(StoreError::Cart(err @ CoreError::OutOfStock { .. })) => {
                warn!(product_id, %err, "update_product_amount: out of stock");
                self.notifier.notify(Severity::Error, MSG_OUT_OF_STOCK);
            }
            Err(err) => {
                error!(product_id, %err, "update_product_amount failed");
                self.notifier.notify(Severity::Error, &err.to_string());
            }
        }
    }

    async fn try_update(
        &self,
        cart: &mut Cart,
        product_id: u64,
        amount: i64,
    ) -> Result<(), StoreError> {
        let stock = self.catalog.stock(product_id).await?;

        if !stock.covers(amount) {
            return Err(CoreError::OutOfStock {
                product_id,
                available: stock.amount,
                requested: amount,
            }
            .into());
        }

        let next = cart.with_amount(product_id, amount);
        self.commit(cart, next).await
    }

    // =========================================================================
    // Commit
    // =========================================================================

    /// Persists `next`, then swaps it in and publishes it.
    ///
    /// Persist-first ordering: when the snapshot write fails the operation
    /// aborts and the in-memory value, the published value, and the snapshot
    /// all still agree on the previous cart.
    async fn commit(&self, cart: &mut Cart, next: Cart) -> Result<(), StoreError> {
        self.snapshots.save(&self.snapshot_key, &next).await?;

        *cart = next.clone();
        self.cart_tx.send_replace(next);

        debug!(items = cart.item_count(), "Cart committed");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
