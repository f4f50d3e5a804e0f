//! Commands for the cart actor.
//!
//! Mutating commands reply with the cart's [`CartSummary`] after the change, so the caller
//! never has to follow up with a separate read.

use crate::geo::GeoPoint;
use crate::model::{CartSummary, DeliveryOption, LineId, MenuItem, PaymentMethod, PlacedOrder};

#[derive(Debug, Clone)]
pub enum CartCommand {
    /// Adds an item the caller already holds.
    AddItem {
        item: MenuItem,
        quantity: u32,
        notes: String,
    },
    /// Looks the item up in the backend catalog, then adds it.
    ///
    /// # Errors
    /// `Backend(RestaurantNotFound | MenuItemNotFound)` for an unknown restaurant or item.
    AddFromMenu {
        restaurant_id: String,
        item_id: String,
        quantity: u32,
        notes: String,
    },
    RemoveItem(LineId),
    /// Zero removes the line.
    UpdateQuantity { line_id: LineId, quantity: u32 },
    SetDeliveryOption(DeliveryOption),
    Clear,
    Summary,
    /// Submits the cart to the backend and empties it.
    ///
    /// # Errors
    /// `EmptyCart` if there is nothing to order. The cart is only emptied once the backend
    /// has accepted the order.
    Checkout {
        destination: GeoPoint,
        payment_method: PaymentMethod,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum CartReply {
    /// The line the item landed on, which may be an existing one.
    Added(LineId),
    Summary(CartSummary),
    Placed(PlacedOrder),
}
