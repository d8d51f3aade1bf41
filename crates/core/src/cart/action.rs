//! Cart actions and their untyped `{ "type", "payload" }` envelope form.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::types::ProductId;

/// Tag of [`CartAction::AddItemToCart`] on the wire.
pub const ADD_ITEM_TO_CART: &str = "ADD_ITEM_TO_CART";
/// Tag of [`CartAction::UpdateItemQuantity`] on the wire.
pub const UPDATE_ITEM_QUANTITY: &str = "UPDATE_ITEM_QUANTITY";

const ADD_ITEM_ALIAS: &str = "ADD_ITEM";
const UPDATE_QUANTITY_ALIAS: &str = "UPDATE_QUANTITY";

/// Errors that can occur when decoding an [`ActionEnvelope`].
#[derive(thiserror::Error, Debug)]
pub enum ActionError {
    /// The tag is known but its payload has the wrong shape.
    #[error("invalid payload for {tag}: {reason}")]
    InvalidPayload {
        /// The recognized action tag.
        tag: &'static str,
        /// Decoder message.
        reason: String,
    },
}

/// Everything the cart reducer knows how to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAction {
    /// Add one unit of a catalog product.
    AddItemToCart { product_id: ProductId },
    /// Change a cart item's quantity by a signed delta.
    UpdateItemQuantity { product_id: ProductId, amount: i64 },
}

impl CartAction {
    #[must_use]
    pub fn add(product_id: impl Into<ProductId>) -> Self {
        Self::AddItemToCart {
            product_id: product_id.into(),
        }
    }

    #[must_use]
    pub fn update(product_id: impl Into<ProductId>, amount: i64) -> Self {
        Self::UpdateItemQuantity {
            product_id: product_id.into(),
            amount,
        }
    }

    /// The wire tag for this action.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::AddItemToCart { .. } => ADD_ITEM_TO_CART,
            Self::UpdateItemQuantity { .. } => UPDATE_ITEM_QUANTITY,
        }
    }

    /// The product this action targets.
    #[must_use]
    pub const fn product_id(&self) -> &ProductId {
        match self {
            Self::AddItemToCart { product_id } | Self::UpdateItemQuantity { product_id, .. } => {
                product_id
            }
        }
    }

    /// Encode as an envelope.
    #[must_use]
    pub fn to_envelope(&self) -> ActionEnvelope {
        let payload = match self {
            Self::AddItemToCart { product_id } => json!(product_id),
            Self::UpdateItemQuantity { product_id, amount } => {
                json!({ "productId": product_id, "amount": amount })
            }
        };
        ActionEnvelope {
            kind: self.tag().to_owned(),
            payload,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdatePayload {
    product_id: ProductId,
    amount: i64,
}

/// An action as the UI dispatch boundary hands it over.
///
/// Unknown tags are tolerated and decode to no action at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionEnvelope {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub payload: Value,
}

impl ActionEnvelope {
    /// Decode into a typed action.
    ///
    /// Returns `Ok(None)` for tags the cart does not handle.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidPayload`] if the tag is recognized but
    /// the payload does not match it.
    pub fn decode(&self) -> Result<Option<CartAction>, ActionError> {
        match self.kind.as_str() {
            ADD_ITEM_TO_CART | ADD_ITEM_ALIAS => {
                let product_id = ProductId::deserialize(&self.payload).map_err(|e| {
                    ActionError::InvalidPayload {
                        tag: ADD_ITEM_TO_CART,
                        reason: e.to_string(),
                    }
                })?;
                Ok(Some(CartAction::AddItemToCart { product_id }))
            }
            UPDATE_ITEM_QUANTITY | UPDATE_QUANTITY_ALIAS => {
                let UpdatePayload { product_id, amount } =
                    UpdatePayload::deserialize(&self.payload).map_err(|e| {
                        ActionError::InvalidPayload {
                            tag: UPDATE_ITEM_QUANTITY,
                            reason: e.to_string(),
                        }
                    })?;
                Ok(Some(CartAction::UpdateItemQuantity { product_id, amount }))
            }
            _ => Ok(None),
        }
    }
}

impl From<&CartAction> for ActionEnvelope {
    fn from(action: &CartAction) -> Self {
        action.to_envelope()
    }
}
