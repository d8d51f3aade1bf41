//! Session-scoped owner of the cart.
//!
//! [`CartStore`] is the single place a cart lives. Views read it through
//! [`CartStore::state`] and request changes through
//! [`CartStore::dispatch`]; there is no ambient global cart.

use tracing::{debug, warn};

use crate::cart::{ActionEnvelope, ActionError, CartAction, CartError, CartState, reduce};
use crate::catalog::ProductLookup;
use crate::types::ProductId;

/// Errors from [`CartStore::dispatch_envelope`].
#[derive(thiserror::Error, Debug)]
pub enum DispatchError {
    #[error(transparent)]
    Action(#[from] ActionError),
    #[error(transparent)]
    Cart(#[from] CartError),
}

/// Holds the current cart and the catalog it draws products from.
#[derive(Debug, Clone)]
pub struct CartStore<C> {
    state: CartState,
    catalog: C,
}

impl<C: ProductLookup> CartStore<C> {
    /// A store with an empty cart.
    pub const fn new(catalog: C) -> Self {
        Self {
            state: CartState::new(),
            catalog,
        }
    }

    /// The current cart.
    pub const fn state(&self) -> &CartState {
        &self.state
    }

    pub const fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Apply an action and keep the resulting cart.
    ///
    /// On error the held cart is left exactly as it was.
    ///
    /// # Errors
    ///
    /// Propagates the reducer's [`CartError`].
    pub fn dispatch(&mut self, action: &CartAction) -> Result<&CartState, CartError> {
        match reduce(&self.state, action, &self.catalog) {
            Ok(next) => {
                debug!(
                    action = action.tag(),
                    product_id = %action.product_id(),
                    items = next.len(),
                    total_quantity = next.total_quantity(),
                    "cart updated"
                );
                self.state = next;
                Ok(&self.state)
            }
            Err(e) => {
                warn!(action = action.tag(), error = %e, "cart action rejected");
                Err(e)
            }
        }
    }

    /// Add one unit of `id`.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotFound`] if the catalog has no such product.
    pub fn add_item_to_cart(&mut self, id: impl Into<ProductId>) -> Result<&CartState, CartError> {
        self.dispatch(&CartAction::add(id))
    }

    /// Change the quantity of `id` by `amount`, removing it at zero.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotFound`] if the item is not in the cart.
    pub fn update_item_quantity(
        &mut self,
        id: impl Into<ProductId>,
        amount: i64,
    ) -> Result<&CartState, CartError> {
        self.dispatch(&CartAction::update(id, amount))
    }

    /// Decode and apply an untyped action.
    ///
    /// Tags the cart does not recognize leave the cart unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Action`] for a malformed payload and
    /// [`DispatchError::Cart`] if the decoded action fails.
    pub fn dispatch_envelope(
        &mut self,
        envelope: &ActionEnvelope,
    ) -> Result<&CartState, DispatchError> {
        match envelope.decode()? {
            Some(action) => Ok(self.dispatch(&action)?),
            None => {
                debug!(action = %envelope.kind, "ignoring unrecognized action");
                Ok(&self.state)
            }
        }
    }

    /// Consume the store, returning the final cart.
    pub fn into_state(self) -> CartState {
        self.state
    }
}
