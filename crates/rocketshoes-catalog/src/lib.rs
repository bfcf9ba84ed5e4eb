//! # rocketshoes-catalog: Remote Catalog/Stock Client
//!
//! This crate provides the HTTP client for the catalog service: product
//! metadata and available stock, fetched per id at cart-mutation time.
//!
//! ## Failure Classes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Catalog Failure Classes                             │
//! │                                                                         │
//! │  GET /stock/{id} or /products/{id}                                      │
//! │       │                                                                 │
//! │       ├── HTTP 404 ──────────────► CatalogError::NotFound               │
//! │       │                            (unknown product: the store shows    │
//! │       │                             its own fixed message)              │
//! │       │                                                                 │
//! │       ├── connect/timeout/5xx ───► CatalogError::RequestFailed          │
//! │       │                            (opaque: the store forwards the      │
//! │       │                             message verbatim)                   │
//! │       │                                                                 │
//! │       └── body not JSON/shape ───► CatalogError::MalformedResponse      │
//! │                                    (opaque, forwarded verbatim)         │
//! │                                                                         │
//! │  Callers branch on the structured kind, never on message text.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`client`] - The `Catalog` trait and the reqwest-backed `CatalogClient`
//! - [`config`] - Catalog endpoint configuration
//! - [`error`] - Catalog error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rocketshoes_catalog::{Catalog, CatalogClient, CatalogConfig};
//!
//! let client = CatalogClient::new(&CatalogConfig::from_env()?)?;
//!
//! let stock = client.stock(1).await?;
//! let product = client.product(1).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod client;
pub mod config;
pub mod error;

// =============================================================================
// Re-exports
// =============================================================================

pub use client::{Catalog, CatalogClient};
pub use config::CatalogConfig;
pub use error::{CatalogError, CatalogResult};
