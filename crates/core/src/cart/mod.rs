//! Shopping cart state and the reducer that advances it.
//!
//! A cart is a plain value. Every change goes through [`reduce`], which
//! takes the current [`CartState`] and a [`CartAction`] and returns the next
//! state without touching the one it was given.
//!
//! ```rust
//! use elegant_context_core::{CartAction, CartState, Catalog, Product, reduce};
//! use rust_decimal::Decimal;
//!
//! let catalog = Catalog::new(vec![Product::new("p1", "Widget", Decimal::new(999, 2))])?;
//! let cart = reduce(&CartState::new(), &CartAction::add("p1"), &catalog)?;
//! let cart = reduce(&cart, &CartAction::add("p1"), &catalog)?;
//! assert_eq!(cart.total_quantity(), 2);
//!
//! let cart = reduce(&cart, &CartAction::update("p1", -2), &catalog)?;
//! assert!(cart.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod action;
mod reducer;
mod state;

use crate::types::ProductId;

pub use action::{ActionEnvelope, ActionError, CartAction};
pub use reducer::reduce;
pub use state::{CartItem, CartState};

/// Errors that can occur when applying a [`CartAction`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    /// The product is not in the catalog (add) or not in the cart (update).
    #[error("product not found: {id}")]
    NotFound {
        /// The id that could not be resolved.
        id: ProductId,
    },
    /// The resulting quantity would not fit in a cart line.
    #[error("quantity overflow for product {id}")]
    QuantityOverflow {
        /// The item whose quantity overflowed.
        id: ProductId,
    },
}
