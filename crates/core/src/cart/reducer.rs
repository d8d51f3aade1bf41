//! The cart reducer: `(state, action) -> next state`.

use crate::catalog::ProductLookup;
use crate::types::ProductId;

use super::{CartAction, CartError, CartItem, CartState};

/// Compute the cart that results from applying `action` to `state`.
///
/// The input state is never modified; callers keep it as the previous
/// snapshot. The catalog is consulted only when a product is added for the
/// first time.
///
/// # Errors
///
/// - [`CartError::NotFound`] if an add names a product the catalog does not
///   have, or an update names a product that is not in the cart.
/// - [`CartError::QuantityOverflow`] if the resulting quantity does not fit.
pub fn reduce<C>(
    state: &CartState,
    action: &CartAction,
    catalog: &C,
) -> Result<CartState, CartError>
where
    C: ProductLookup + ?Sized,
{
    match action {
        CartAction::AddItemToCart { product_id } => add_item(state, product_id, catalog),
        CartAction::UpdateItemQuantity { product_id, amount } => {
            update_quantity(state, product_id, *amount)
        }
    }
}

fn add_item<C>(state: &CartState, id: &ProductId, catalog: &C) -> Result<CartState, CartError>
where
    C: ProductLookup + ?Sized,
{
    let mut items = state.items.clone();

    if let Some(existing) = items.iter_mut().find(|item| &item.id == id) {
        existing.quantity = existing
            .quantity
            .checked_add(1)
            .ok_or_else(|| CartError::QuantityOverflow { id: id.clone() })?;
    } else {
        let product = catalog
            .find_by_id(id)
            .ok_or_else(|| CartError::NotFound { id: id.clone() })?;
        items.push(CartItem::from_product(product));
    }

    Ok(CartState { items })
}

fn update_quantity(state: &CartState, id: &ProductId, amount: i64) -> Result<CartState, CartError> {
    let index = state
        .position(id)
        .ok_or_else(|| CartError::NotFound { id: id.clone() })?;

    let mut items = state.items.clone();
    let Some(item) = items.get_mut(index) else {
        return Err(CartError::NotFound { id: id.clone() });
    };

    let quantity = i64::from(item.quantity).saturating_add(amount);
    if quantity <= 0 {
        items.remove(index);
    } else {
        item.quantity = u32::try_from(quantity)
            .map_err(|_| CartError::QuantityOverflow { id: id.clone() })?;
    }

    Ok(CartState { items })
}
