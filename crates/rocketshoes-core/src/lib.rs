//! # rocketshoes-core: Pure Cart Logic for RocketShoes
//!
//! This crate is the **heart** of the RocketShoes cart. It contains the cart
//! value type and its mutation rules as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      RocketShoes Cart Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   Storefront UI (web frontend)                  │   │
//! │  │     Shelf ──► Cart Badge ──► Cart Page ──► Toast messages       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                     rocketshoes-store                           │   │
//! │  │     add_product, remove_product, update_product_amount          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ rocketshoes-core (THIS CRATE) ★                 │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   types   │  │   cart    │  │   error   │  │  format   │   │   │
//! │  │   │  Product  │  │   Cart    │  │ CoreError │  │  prices   │   │   │
//! │  │   │   Stock   │  │ mutations │  │           │  │           │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Stock, CartSummary)
//! - [`cart`] - The Cart value type and its pure mutation operations
//! - [`error`] - Domain error types
//! - [`format`] - Price formatting for the storefront
//!
//! ## Design Principles
//!
//! 1. **Value Semantics**: Every mutation produces a wholly new `Cart`;
//!    callers swap the new value in, nothing is edited in place
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use rocketshoes_core::{Cart, Product};
//!
//! let sneaker = Product {
//!     id: 1,
//!     title: "Fly Knit Runner".to_string(),
//!     price: 179.9,
//!     image: "https://cdn.rocketshoes.dev/fly-knit.jpg".to_string(),
//!     amount: 0,
//! };
//!
//! // Appending yields a new cart; the original is untouched
//! let cart = Cart::new().append(sneaker);
//! assert_eq!(cart.item_count(), 1);
//! assert_eq!(cart.total_quantity(), 1);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod format;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use rocketshoes_core::Cart` instead of
// `use rocketshoes_core::cart::Cart`

pub use cart::Cart;
pub use error::{CoreError, CoreResult};
pub use types::{CartSummary, Product, Stock};
