//! # Error Types
//!
//! Domain-specific error types for rocketshoes-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  rocketshoes-core errors (this file)                                    │
//! │  └── CoreError       - Cart rule violations                             │
//! │                                                                         │
//! │  rocketshoes-catalog errors (separate crate)                            │
//! │  └── CatalogError    - Not-found vs transport failures                  │
//! │                                                                         │
//! │  rocketshoes-storage errors (separate crate)                            │
//! │  └── StorageError    - Snapshot read/write failures                     │
//! │                                                                         │
//! │  rocketshoes-store errors                                               │
//! │  └── StoreError      - Aggregates the above; converted into             │
//! │                        notification messages, never re-thrown           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product id, bounds)
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Cart rule violations.
///
/// These are caught by the store and translated into user-facing
/// notifications; they never reach the UI as errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The requested quantity exceeds available stock.
    ///
    /// ## When This Occurs
    /// - Incrementing an entry whose amount has reached the stock ceiling
    /// - Setting an entry's amount above the stock ceiling
    #[error("insufficient stock for product {product_id}: available {available}, requested {requested}")]
    OutOfStock {
        product_id: u64,
        available: i64,
        requested: i64,
    },

    /// The targeted product has no entry in the cart.
    ///
    /// ## When This Occurs
    /// - Removing a product that was never added (or already removed)
    #[error("product {0} is not in the cart")]
    ProductNotInCart(u64),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::OutOfStock {
            product_id: 3,
            available: 2,
            requested: 3,
        };
        assert_eq!(
            err.to_string(),
            "insufficient stock for product 3: available 2, requested 3"
        );

        let err = CoreError::ProductNotInCart(7);
        assert_eq!(err.to_string(), "product 7 is not in the cart");
    }
}
