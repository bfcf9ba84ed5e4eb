//! # Domain Types
//!
//! Core domain types shared between the cart, the catalog client, and the
//! storefront UI.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │      Stock      │   │   CartSummary   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u64)       │   │  id (u64)       │   │  item_count     │       │
//! │  │  title          │   │  amount         │   │  total_quantity │       │
//! │  │  price          │   │                 │   │  subtotal       │       │
//! │  │  image          │   │  read-only,     │   │                 │       │
//! │  │  amount (cart)  │   │  catalog-owned  │   │  UI projection  │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Two Amounts
//! `Product.amount` is the quantity held in the cart. `Stock.amount` is the
//! maximum purchasable quantity, owned by the catalog service. The cart never
//! writes stock; stock bounds cart mutations at the moment they happen.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::Cart;

// =============================================================================
// Product
// =============================================================================

/// A catalog product, carried in the cart with its selected quantity.
///
/// ## Wire Format
/// The catalog's `GET /products/{id}` response has no `amount` field; it
/// defaults to zero on deserialization and the cart sets it when the product
/// is added. The persisted snapshot includes `amount`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Catalog identifier.
    pub id: u64,

    /// Display name shown on the shelf and in the cart.
    pub title: String,

    /// Unit price. The catalog serves prices as JSON numbers.
    pub price: f64,

    /// Product image URL.
    pub image: String,

    /// Quantity of this product held in the cart (not stock).
    #[serde(default)]
    pub amount: i64,
}

impl Product {
    /// Line total for this cart entry (unit price × quantity).
    pub fn line_total(&self) -> f64 {
        self.price * self.amount as f64
    }
}

// =============================================================================
// Stock
// =============================================================================

/// Available stock for a product, as reported by the catalog service.
///
/// Read-only from the cart's perspective: the cart checks against it at
/// mutation time but never updates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Stock {
    /// Catalog identifier of the product this stock belongs to.
    pub id: u64,

    /// Maximum purchasable quantity.
    pub amount: i64,
}

impl Stock {
    /// Returns true if this stock level covers the requested quantity.
    pub fn covers(&self, requested: i64) -> bool {
        requested <= self.amount
    }
}

// =============================================================================
// Cart Summary
// =============================================================================

/// Cart totals projection for the UI layer (badge count, cart page footer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartSummary {
    /// Number of distinct products in the cart.
    pub item_count: usize,

    /// Total quantity across all entries.
    pub total_quantity: i64,

    /// Sum of all line totals.
    pub subtotal: f64,
}

impl From<&Cart> for CartSummary {
    fn from(cart: &Cart) -> Self {
        CartSummary {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            subtotal: cart.subtotal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, price: f64, amount: i64) -> Product {
        Product {
            id,
            title: format!("Sneaker {}", id),
            price,
            image: format!("https://cdn.rocketshoes.dev/{}.jpg", id),
            amount,
        }
    }

    #[test]
    fn test_line_total() {
        let entry = product(1, 179.9, 2);
        assert!((entry.line_total() - 359.8).abs() < f64::EPSILON);
    }

    #[test]
    fn test_stock_covers() {
        let stock = Stock { id: 1, amount: 5 };
        assert!(stock.covers(1));
        assert!(stock.covers(5));
        assert!(!stock.covers(6));
    }

    #[test]
    fn test_product_amount_defaults_to_zero() {
        // Catalog product responses carry no amount field
        let raw = r#"{"id":3,"title":"Trail Boot","price":219.9,"image":"boot.jpg"}"#;
        let parsed: Product = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.amount, 0);
    }

    #[test]
    fn test_summary_from_cart() {
        let cart = Cart::new()
            .append(product(1, 10.0, 0))
            .append(product(2, 5.5, 0));
        let cart = cart.with_amount(2, 3);

        let summary = CartSummary::from(&cart);
        assert_eq!(summary.item_count, 2);
        assert_eq!(summary.total_quantity, 4);
        assert!((summary.subtotal - 26.5).abs() < f64::EPSILON);
    }
}
