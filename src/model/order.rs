//! Order types: what checkout sends to the backend, what the backend echoes back, and the
//! slimmed-down [`Order`] the delivery tracker consumes.

use crate::geo::GeoPoint;
use crate::model::{CartLine, DeliveryOption};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifier assigned to an order by the backend (e.g. `mock-1718000000000`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// How the customer pays. Only recorded on the order; nothing is charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Card,
    PromptPay,
}

/// Backend-side order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
}

/// Payload for placing an order, built from the cart at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub items: Vec<CartLine>,
    pub total_price: u32,
    pub delivery_option: DeliveryOption,
    pub payment_method: PaymentMethod,
    pub delivery_location: Option<GeoPoint>,
}

/// The backend's reply to [`OrderRequest`]: the request echoed back plus server-side fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedOrder {
    pub order_id: OrderId,
    pub status: OrderStatus,
    #[serde(flatten)]
    pub request: OrderRequest,
    pub restaurant_origin: Option<GeoPoint>,
}

/// The order as the delivery tracker sees it.
///
/// The geographic fields are optional because they arrive from outside; the simulator refuses
/// to start without both. Filling a missing origin is the caller's call, made explicitly with
/// [`Order::with_origin_or`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    pub restaurant_origin: Option<GeoPoint>,
    pub destination: Option<GeoPoint>,
    pub completed: bool,
}

impl Order {
    /// Creates an in-flight order with both endpoints known.
    pub fn new(order_id: impl Into<OrderId>, restaurant_origin: GeoPoint, destination: GeoPoint) -> Self {
        Self {
            order_id: order_id.into(),
            restaurant_origin: Some(restaurant_origin),
            destination: Some(destination),
            completed: false,
        }
    }

    /// Uses `fallback` as the restaurant origin if none was supplied.
    pub fn with_origin_or(mut self, fallback: GeoPoint) -> Self {
        self.restaurant_origin.get_or_insert(fallback);
        self
    }

    /// Uses `fallback` as the destination if none was supplied.
    pub fn with_destination_or(mut self, fallback: GeoPoint) -> Self {
        self.destination.get_or_insert(fallback);
        self
    }
}

impl From<&PlacedOrder> for Order {
    fn from(placed: &PlacedOrder) -> Self {
        Self {
            order_id: placed.order_id.clone(),
            restaurant_origin: placed.restaurant_origin,
            destination: placed.request.delivery_location,
            completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_fallback_only_fills_gaps() {
        let shop = GeoPoint::new(1.0, 2.0);
        let fallback = GeoPoint::new(9.0, 9.0);

        let order = Order {
            order_id: OrderId::from("a"),
            restaurant_origin: None,
            destination: None,
            completed: false,
        };
        assert_eq!(order.with_origin_or(fallback).restaurant_origin, Some(fallback));

        let order = Order::new("b", shop, shop);
        assert_eq!(order.with_origin_or(fallback).restaurant_origin, Some(shop));
    }

    #[test]
    fn placed_order_maps_delivery_location_to_destination() {
        let home = GeoPoint::new(13.736717, 100.534847);
        let placed = PlacedOrder {
            order_id: OrderId::from("mock-42"),
            status: OrderStatus::Pending,
            request: OrderRequest {
                items: vec![],
                total_price: 30,
                delivery_option: DeliveryOption::Standard,
                payment_method: PaymentMethod::Cash,
                delivery_location: Some(home),
            },
            restaurant_origin: None,
        };

        let order = Order::from(&placed);
        assert_eq!(order.order_id.to_string(), "mock-42");
        assert_eq!(order.destination, Some(home));
        assert_eq!(order.restaurant_origin, None);
        assert!(!order.completed);

        let fallback = GeoPoint::new(9.0, 9.0);
        assert_eq!(order.clone().with_destination_or(fallback).destination, Some(home));

        let order = Order {
            destination: None,
            ..order
        };
        assert_eq!(order.with_destination_or(fallback).destination, Some(fallback));
    }
}
