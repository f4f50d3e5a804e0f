//! Error types for the cart actor.

use crate::backend::BackendError;
use crate::model::{CartRuleError, LineId};
use thiserror::Error;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The quantity is invalid (zero when adding).
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// The change would overflow a line or the cart total.
    #[error("Quantity {quantity} of {item_id} is too large")]
    QuantityTooLarge { item_id: String, quantity: u32 },

    /// No line with this id is in the cart.
    #[error("Cart line not found: {0}")]
    LineNotFound(LineId),

    /// Checkout was attempted with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// The backend refused a lookup or the order.
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),
}

impl From<CartRuleError> for CartError {
    fn from(e: CartRuleError) -> Self {
        match e {
            CartRuleError::InvalidQuantity(quantity) => CartError::InvalidQuantity(quantity),
            CartRuleError::QuantityTooLarge { item_id, quantity } => {
                CartError::QuantityTooLarge { item_id, quantity }
            }
            CartRuleError::LineNotFound(line_id) => CartError::LineNotFound(line_id),
            CartRuleError::EmptyCart => CartError::EmptyCart,
        }
    }
}
