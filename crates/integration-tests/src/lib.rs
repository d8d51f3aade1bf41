//! Integration tests for Elegant Context.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p elegant-context-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_reducer` - Reducer properties over many cart shapes
//! - `cart_session` - Whole sessions driven through the store and envelopes
//!
//! This library holds the shared catalog and cart builders.

use elegant_context_core::{CartAction, CartState, Catalog, Product, ProductId, reduce};
use rust_decimal::Decimal;

/// Catalog with `p1` Widget at 9.99 plus a few more products.
///
/// # Panics
///
/// Panics if the fixed product list stops being a valid catalog.
#[must_use]
pub fn widget_catalog() -> Catalog {
    let products = vec![
        Product::new("p1", "Widget", Decimal::new(999, 2)),
        Product::new("p2", "Gadget", Decimal::new(2450, 2)),
        Product::new("p3", "Gizmo", Decimal::new(300, 2)),
        Product::new("p4", "Doohickey", Decimal::new(12_000, 2)),
    ];
    Catalog::new(products).expect("widget catalog should be valid")
}

/// Build a cart by adding each `(id, quantity)` pair in order.
///
/// # Panics
///
/// Panics if an id is missing from `catalog` or listed twice, or if a
/// quantity is 0, so a mistyped case cannot quietly build another cart.
#[must_use]
pub fn cart_with(catalog: &Catalog, lines: &[(&str, u32)]) -> CartState {
    lines.iter().fold(CartState::new(), |state, &(id, quantity)| {
        assert!(quantity >= 1, "quantity for {id} must be at least 1");
        assert!(
            state.get(&ProductId::new(id)).is_none(),
            "{id} is listed more than once"
        );

        let added = reduce(&state, &CartAction::add(id), catalog)
            .unwrap_or_else(|e| panic!("adding {id} failed: {e}"));
        if quantity == 1 {
            return added;
        }
        let action = CartAction::update(id, i64::from(quantity) - 1);
        reduce(&added, &action, catalog).expect("raising a fresh line's quantity should succeed")
    })
}

/// Product ids of `state` in order.
#[must_use]
pub fn ids(state: &CartState) -> Vec<&str> {
    state.items().iter().map(|item| item.id.as_str()).collect()
}
