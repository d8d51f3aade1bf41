//! Cart items and the cart state value threaded through the reducer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::types::{CurrencyCode, Price, ProductId};

/// A product line in the cart.
///
/// `name` and `unit_price` are copied from the catalog when the item is
/// first added; later catalog changes do not reach items already in a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ProductId,
    pub name: String,
    pub unit_price: Decimal,
    /// Always at least 1 while the item is in a cart.
    pub quantity: u32,
}

impl CartItem {
    /// A fresh single-quantity line for `product`.
    #[must_use]
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.title.clone(),
            unit_price: product.price,
            quantity: 1,
        }
    }

    /// `unit_price × quantity`, or `None` if it exceeds [`Decimal::MAX`].
    #[must_use]
    pub fn line_total(&self) -> Option<Decimal> {
        self.unit_price.checked_mul(Decimal::from(self.quantity))
    }
}

/// The whole cart for one session.
///
/// Items are unique by id and kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CartState {
    pub(crate) items: Vec<CartItem>,
}

impl CartState {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Look up an item by product id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub(crate) fn position(&self, id: &ProductId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }

    /// Number of distinct products in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all quantities, as shown on the header badge.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    /// Sum of all line totals, or `None` if any step exceeds
    /// [`Decimal::MAX`].
    #[must_use]
    pub fn subtotal(&self) -> Option<Decimal> {
        self.items.iter().try_fold(Decimal::ZERO, |total, item| {
            total.checked_add(item.line_total()?)
        })
    }

    /// The subtotal as a displayable [`Price`].
    #[must_use]
    pub fn subtotal_price(&self, currency_code: CurrencyCode) -> Option<Price> {
        self.subtotal()
            .map(|amount| Price::new(amount, currency_code))
    }
}

impl<'a> IntoIterator for &'a CartState {
    type Item = &'a CartItem;
    type IntoIter = std::slice::Iter<'a, CartItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn item(id: &str, cents: i64, quantity: u32) -> CartItem {
        CartItem {
            id: ProductId::new(id),
            name: id.to_uppercase(),
            unit_price: Decimal::new(cents, 2),
            quantity,
        }
    }

    #[test]
    fn test_empty_cart() {
        let cart = CartState::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total_quantity(), 0);
        assert_eq!(cart.subtotal(), Some(Decimal::ZERO));
        assert_eq!(cart.subtotal_price(CurrencyCode::USD).unwrap().display(), "$0.00");
    }

    #[test]
    fn test_totals() {
        let cart = CartState {
            items: vec![item("p1", 999, 2), item("p2", 500, 3)],
        };
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total_quantity(), 5);
        assert_eq!(cart.subtotal(), Some(Decimal::new(3498, 2)));
        assert_eq!(cart.subtotal_price(CurrencyCode::EUR).unwrap().display(), "€34.98");
    }

    #[test]
    fn test_line_total() {
        assert_eq!(item("p1", 1250, 4).line_total(), Some(Decimal::new(5000, 2)));
    }

    #[test]
    fn test_line_total_overflow() {
        let huge = CartItem {
            unit_price: "100000000000000000000".parse().unwrap(),
            ..item("p1", 0, 1_000_000_000)
        };
        assert!(huge.line_total().is_none());

        let cart = CartState {
            items: vec![item("p2", 100, 1), huge],
        };
        assert!(cart.subtotal().is_none());
        assert!(cart.subtotal_price(CurrencyCode::USD).is_none());
        assert_eq!(cart.total_quantity(), 1_000_000_001);
    }

    #[test]
    fn test_subtotal_sum_overflow() {
        let max = CartItem {
            unit_price: Decimal::MAX,
            ..item("p1", 0, 1)
        };
        let cart = CartState {
            items: vec![max.clone(), CartItem { id: ProductId::new("p2"), ..max }],
        };
        assert_eq!(cart.items()[0].line_total(), Some(Decimal::MAX));
        assert!(cart.subtotal().is_none());
    }

    #[test]
    fn test_get_and_position() {
        let cart = CartState {
            items: vec![item("p1", 100, 1), item("p2", 100, 1)],
        };
        assert_eq!(cart.position(&ProductId::new("p2")), Some(1));
        assert!(cart.get(&ProductId::new("p3")).is_none());
    }
}
