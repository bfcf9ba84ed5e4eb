//! # Cart Value Type
//!
//! The cart and its mutation rules.
//!
//! ## Value Semantics
//! Every mutation returns a **new** `Cart`; the receiver is never edited in
//! place. The store swaps the new value in only after it has been persisted,
//! so the in-memory cart, the published cart, and the snapshot always agree.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cart Value Operations                             │
//! │                                                                         │
//! │  Store Operation           Cart Method            Result                │
//! │  ───────────────           ───────────            ──────                │
//! │                                                                         │
//! │  add (already in cart) ──► increment(id, stock) ─► amount + 1 or        │
//! │                                                    OutOfStock           │
//! │                                                                         │
//! │  add (new product) ──────► append(product) ──────► entry at amount 1,   │
//! │                                                    end of the list      │
//! │                                                                         │
//! │  remove ─────────────────► remove(id) ───────────► entry gone or        │
//! │                                                    ProductNotInCart     │
//! │                                                                         │
//! │  set quantity ───────────► with_amount(id, n) ───► matching entry       │
//! │                                                    replaced, others     │
//! │                                                    untouched            │
//! │                                                                         │
//! │  NOTE: entries are unique by id; insertion order is first-added order   │
//! │        and survives every mutation.                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::Product;

/// The shopping cart: an ordered sequence of products, unique by id.
///
/// ## Invariants
/// - No two entries share an `id`
/// - Every entry's `amount` is positive
/// - Insertion order is preserved across mutations (preserve-on-update,
///   append-on-add)
///
/// ## Serialized Form
/// A bare JSON array of products. This is both the snapshot format and what
/// the UI layer receives.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<Product>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Returns the entry for `product_id`, if present.
    pub fn get(&self, product_id: u64) -> Option<&Product> {
        self.items.iter().find(|p| p.id == product_id)
    }

    /// Returns true if the cart holds an entry for `product_id`.
    pub fn contains(&self, product_id: u64) -> bool {
        self.get(product_id).is_some()
    }

    /// Returns the entries in insertion order.
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Returns a new cart with the matching entry's amount increased by one.
    ///
    /// ## Behavior
    /// - The entry keeps its position; all other entries are untouched
    /// - Fails with `OutOfStock` when the current amount has already reached
    ///   `available` (cannot increment past available stock)
    /// - Fails with `ProductNotInCart` when there is no matching entry;
    ///   callers decide whether to `append` instead
    pub fn increment(&self, product_id: u64, available: i64) -> CoreResult<Cart> {
        let current = self
            .get(product_id)
            .ok_or(CoreError::ProductNotInCart(product_id))?;

        if current.amount >= available {
            return Err(CoreError::OutOfStock {
                product_id,
                available,
                requested: current.amount + 1,
            });
        }

        let items = self
            .items
            .iter()
            .map(|p| {
                if p.id == product_id {
                    Product {
                        amount: p.amount + 1,
                        ..p.clone()
                    }
                } else {
                    p.clone()
                }
            })
            .collect();

        Ok(Cart { items })
    }

    /// Returns a new cart with `product` appended at amount 1.
    ///
    /// The incoming product is catalog metadata; whatever `amount` it carried
    /// is overwritten.
    pub fn append(&self, product: Product) -> Cart {
        let mut items = self.items.clone();
        items.push(Product {
            amount: 1,
            ..product
        });
        Cart { items }
    }

    /// Returns a new cart without the matching entry.
    ///
    /// Fails with `ProductNotInCart` when nothing was removed (the resulting
    /// cart would be identical).
    pub fn remove(&self, product_id: u64) -> CoreResult<Cart> {
        let items: Vec<Product> = self
            .items
            .iter()
            .filter(|p| p.id != product_id)
            .cloned()
            .collect();

        if items.len() == self.items.len() {
            return Err(CoreError::ProductNotInCart(product_id));
        }

        Ok(Cart { items })
    }

    /// Returns a new cart with the matching entry's amount replaced.
    ///
    /// Entries that don't match are unchanged. If no entry matches, the
    /// result is an identical copy; callers still re-persist it.
    pub fn with_amount(&self, product_id: u64, amount: i64) -> Cart {
        let items = self
            .items
            .iter()
            .map(|p| {
                if p.id == product_id {
                    Product { amount, ..p.clone() }
                } else {
                    p.clone()
                }
            })
            .collect();

        Cart { items }
    }

    /// Returns the number of distinct products in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity across all entries.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|p| p.amount).sum()
    }

    /// Returns the sum of all line totals.
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(|p| p.line_total()).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, amount: i64) -> Product {
        Product {
            id,
            title: format!("Sneaker {}", id),
            price: 99.9,
            image: format!("https://cdn.rocketshoes.dev/{}.jpg", id),
            amount,
        }
    }

    fn cart_of(entries: &[(u64, i64)]) -> Cart {
        Cart {
            items: entries.iter().map(|&(id, amount)| product(id, amount)).collect(),
        }
    }

    #[test]
    fn test_increment_within_stock() {
        let cart = cart_of(&[(1, 1), (2, 4)]);

        let next = cart.increment(1, 5).unwrap();

        assert_eq!(next.get(1).unwrap().amount, 2);
        assert_eq!(next.get(2).unwrap().amount, 4);
        // Source cart is a value; it did not change
        assert_eq!(cart.get(1).unwrap().amount, 1);
    }

    #[test]
    fn test_increment_at_stock_ceiling_fails() {
        let cart = cart_of(&[(1, 5)]);

        let err = cart.increment(1, 5).unwrap_err();
        assert!(matches!(
            err,
            CoreError::OutOfStock {
                product_id: 1,
                available: 5,
                requested: 6,
            }
        ));
    }

    #[test]
    fn test_increment_missing_entry_fails() {
        let cart = cart_of(&[(1, 1)]);
        assert!(matches!(
            cart.increment(9, 5).unwrap_err(),
            CoreError::ProductNotInCart(9)
        ));
    }

    #[test]
    fn test_append_sets_amount_one_at_end() {
        let cart = cart_of(&[(1, 2)]);

        // Catalog metadata arrives with amount 0
        let next = cart.append(product(2, 0));

        assert_eq!(next.item_count(), 2);
        assert_eq!(next.items()[1].id, 2);
        assert_eq!(next.items()[1].amount, 1);
    }

    #[test]
    fn test_remove_preserves_order() {
        let cart = cart_of(&[(1, 1), (2, 2), (3, 3)]);

        let next = cart.remove(2).unwrap();

        let ids: Vec<u64> = next.items().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_remove_absent_fails() {
        let cart = cart_of(&[(1, 1)]);
        assert!(matches!(
            cart.remove(7).unwrap_err(),
            CoreError::ProductNotInCart(7)
        ));
    }

    #[test]
    fn test_with_amount_replaces_only_match() {
        let cart = cart_of(&[(1, 1), (2, 2)]);

        let next = cart.with_amount(2, 4);

        assert_eq!(next.get(1).unwrap().amount, 1);
        assert_eq!(next.get(2).unwrap().amount, 4);
        let ids: Vec<u64> = next.items().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_with_amount_absent_id_is_identity() {
        let cart = cart_of(&[(1, 1)]);
        assert_eq!(cart.with_amount(9, 4), cart);
    }

    #[test]
    fn test_totals() {
        let cart = cart_of(&[(1, 2), (2, 1)]);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total_quantity(), 3);
        assert!((cart.subtotal() - 299.7).abs() < 1e-9);
        assert!(!cart.is_empty());
        assert!(Cart::new().is_empty());
    }

    #[test]
    fn test_serializes_as_bare_array() {
        let cart = cart_of(&[(1, 2)]);
        let json = serde_json::to_string(&cart).unwrap();
        assert!(json.starts_with('['), "snapshot format is a JSON array: {}", json);

        let parsed: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, cart);
    }
}
