//! # Mock Backend
//!
//! An in-memory stand-in for the storefront API: a fixed catalog of eight Bangkok restaurants,
//! and an order endpoint that echoes the request back with an id, a `Pending` status and the
//! restaurant's location.
//!
//! Every order is picked up from the same place, [`MOCK_RESTAURANT_ORIGIN`], whichever
//! restaurant the food came from.

use crate::geo::GeoPoint;
use crate::model::{
    MenuItem, OrderId, OrderRequest, OrderStatus, PlacedOrder, Restaurant, RestaurantSummary,
};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Where the mock backend says every order is cooked.
pub const MOCK_RESTAURANT_ORIGIN: GeoPoint = GeoPoint::new(13.7469, 100.5299);

/// Errors returned by the mock backend.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BackendError {
    #[error("Restaurant not found: {0}")]
    RestaurantNotFound(String),

    #[error("Menu item {item_id} not found at restaurant {restaurant_id}")]
    MenuItemNotFound {
        restaurant_id: String,
        item_id: String,
    },

    #[error("Order has no items")]
    EmptyOrder,
}

/// Catalog and order echo.
#[derive(Debug, Clone)]
pub struct MockBackend {
    restaurants: Vec<Restaurant>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBackend {
    /// A backend serving the built-in catalog.
    pub fn new() -> Self {
        Self::with_restaurants(catalog())
    }

    pub fn with_restaurants(restaurants: Vec<Restaurant>) -> Self {
        Self { restaurants }
    }

    /// All restaurants, without their menus.
    pub fn restaurants(&self) -> Vec<RestaurantSummary> {
        self.restaurants.iter().map(|r| r.summary.clone()).collect()
    }

    pub fn restaurant(&self, restaurant_id: &str) -> Result<&Restaurant, BackendError> {
        self.restaurants
            .iter()
            .find(|r| r.id() == restaurant_id)
            .ok_or_else(|| BackendError::RestaurantNotFound(restaurant_id.to_string()))
    }

    pub fn menu(&self, restaurant_id: &str) -> Result<&[MenuItem], BackendError> {
        self.restaurant(restaurant_id).map(|r| r.menu.as_slice())
    }

    pub fn menu_item(&self, restaurant_id: &str, item_id: &str) -> Result<&MenuItem, BackendError> {
        self.restaurant(restaurant_id)?
            .menu_item(item_id)
            .ok_or_else(|| BackendError::MenuItemNotFound {
                restaurant_id: restaurant_id.to_string(),
                item_id: item_id.to_string(),
            })
    }

    /// Accepts an order and echoes it back as a [`PlacedOrder`].
    pub fn create_order(&self, request: OrderRequest) -> Result<PlacedOrder, BackendError> {
        if request.items.is_empty() {
            return Err(BackendError::EmptyOrder);
        }
        if request.delivery_location.is_none() {
            warn!("Order has no delivery location");
        }

        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis())
            .unwrap_or_default();
        let placed = PlacedOrder {
            order_id: OrderId(format!("mock-{millis}")),
            status: OrderStatus::Pending,
            request,
            restaurant_origin: Some(MOCK_RESTAURANT_ORIGIN),
        };

        info!(
            order_id = %placed.order_id,
            items = placed.request.items.len(),
            total = placed.request.total_price,
            "Order created"
        );
        debug!(?placed, "Order payload");
        Ok(placed)
    }
}

fn catalog() -> Vec<Restaurant> {
    vec![
        Restaurant::new(
            "1",
            "Aroi Yok Niew",
            "Made to order",
            4.5,
            "25-35 min",
            vec![
                MenuItem::new("m1", "Crispy Pork Kaprao", 60),
                MenuItem::new("m2", "Fried Rice", 55),
                MenuItem::new("m13", "Pad See Ew", 65),
            ],
        ),
        Restaurant::new(
            "2",
            "Somtum Saeb Nua",
            "Isan",
            4.8,
            "20-30 min",
            vec![
                MenuItem::new("m3", "Som Tum Thai", 50),
                MenuItem::new("m4", "Grilled Pork Neck", 80),
                MenuItem::new("m14", "Larb Moo", 70),
            ],
        ),
        Restaurant::new(
            "3",
            "Charcoal Oven Pizza",
            "Pizza",
            4.2,
            "30-40 min",
            vec![
                MenuItem::new("m5", "Hawaiian Pizza", 250),
                MenuItem::new("m6", "Pepperoni Pizza", 230),
                MenuItem::new("m15", "Margherita Pizza", 200),
            ],
        ),
        Restaurant::new(
            "4",
            "Boat Noodles Rot Det",
            "Noodles",
            4.6,
            "15-25 min",
            vec![
                MenuItem::new("m7", "Pork Boat Noodles", 50),
                MenuItem::new("m8", "Beef Boat Noodles", 60),
                MenuItem::new("m16", "Blanched Meatballs", 40),
            ],
        ),
        Restaurant::new(
            "5",
            "Khao Kha Moo Trok Sung",
            "Stewed pork leg",
            4.7,
            "20-30 min",
            vec![
                MenuItem::new("m9", "Khao Kha Moo Special", 70),
                MenuItem::new("m10", "Khao Kaki", 80),
            ],
        ),
        Restaurant::new(
            "6",
            "Jay Oh Duck Rice Soup",
            "Rice soup",
            4.9,
            "30-45 min",
            vec![
                MenuItem::new("m11", "Mama Oho", 150),
                MenuItem::new("m12", "Spicy Pickled Crab Salad", 300),
            ],
        ),
        Restaurant::new(
            "7",
            "Fresh Seafood House",
            "Seafood",
            4.3,
            "35-50 min",
            vec![
                MenuItem::new("m17", "Grilled Prawns", 400),
                MenuItem::new("m18", "Grilled Squid", 250),
            ],
        ),
        Restaurant::new(
            "8",
            "Indie Burger",
            "Burgers",
            4.4,
            "20-30 min",
            vec![
                MenuItem::new("m19", "Beef Burger", 120),
                MenuItem::new("m20", "Crispy Chicken Burger", 90),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CartLine, DeliveryOption, LineId, PaymentMethod};

    fn request(items: Vec<CartLine>) -> OrderRequest {
        OrderRequest {
            items,
            total_price: 90,
            delivery_option: DeliveryOption::Standard,
            payment_method: PaymentMethod::Cash,
            delivery_location: Some(GeoPoint::new(13.736717, 100.534847)),
        }
    }

    fn line() -> CartLine {
        CartLine {
            line_id: LineId(1),
            item_id: "m1".to_string(),
            name: "Crispy Pork Kaprao".to_string(),
            price: 60,
            quantity: 1,
            notes: String::new(),
        }
    }

    #[test]
    fn listing_has_eight_restaurants() {
        let backend = MockBackend::new();
        let listing = backend.restaurants();
        assert_eq!(listing.len(), 8);
        assert_eq!(listing[0].id, "1");
    }

    #[test]
    fn menu_lookup() {
        let backend = MockBackend::new();
        assert_eq!(backend.menu("5").unwrap().len(), 2);
        assert_eq!(backend.menu_item("3", "m6").unwrap().price, 230);
    }

    #[test]
    fn unknown_restaurant_and_item() {
        let backend = MockBackend::new();
        assert_eq!(
            backend.menu("99").unwrap_err(),
            BackendError::RestaurantNotFound("99".to_string())
        );
        assert_eq!(
            backend.menu_item("1", "m19").unwrap_err(),
            BackendError::MenuItemNotFound {
                restaurant_id: "1".to_string(),
                item_id: "m19".to_string(),
            }
        );
        assert!(matches!(
            backend.menu_item("99", "m1"),
            Err(BackendError::RestaurantNotFound(_))
        ));
    }

    #[test]
    fn order_echo_adds_id_status_and_origin() {
        let backend = MockBackend::new();
        let req = request(vec![line()]);
        let placed = backend.create_order(req.clone()).unwrap();

        assert!(placed.order_id.0.starts_with("mock-"));
        assert_eq!(placed.status, OrderStatus::Pending);
        assert_eq!(placed.restaurant_origin, Some(MOCK_RESTAURANT_ORIGIN));
        assert_eq!(placed.request, req);
    }

    #[test]
    fn empty_order_is_refused() {
        let backend = MockBackend::new();
        assert_eq!(
            backend.create_order(request(vec![])).unwrap_err(),
            BackendError::EmptyOrder
        );
    }
}
