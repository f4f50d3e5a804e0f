//! Catalog data served by the mock backend.

use serde::{Deserialize, Serialize};

/// A dish on a restaurant's menu. Prices are whole baht.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub price: u32,
    pub image: String,
}

impl MenuItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: u32) -> Self {
        let id = id.into();
        let image = format!("https://via.placeholder.com/80?text={id}");
        Self {
            id,
            name: name.into(),
            price,
            image,
        }
    }
}

/// A restaurant without its menu, as returned by the listing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantSummary {
    pub id: String,
    pub name: String,
    pub cuisine: String,
    pub rating: f32,
    pub delivery_time: String,
    pub image: String,
}

/// A restaurant together with its menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    #[serde(flatten)]
    pub summary: RestaurantSummary,
    pub menu: Vec<MenuItem>,
}

impl Restaurant {
    pub fn new(
        id: &str,
        name: &str,
        cuisine: &str,
        rating: f32,
        delivery_time: &str,
        menu: Vec<MenuItem>,
    ) -> Self {
        Self {
            summary: RestaurantSummary {
                id: id.to_string(),
                name: name.to_string(),
                cuisine: cuisine.to_string(),
                rating,
                delivery_time: delivery_time.to_string(),
                image: format!("https://via.placeholder.com/100?text=Restaurant{id}"),
            },
            menu,
        }
    }

    pub fn id(&self) -> &str {
        &self.summary.id
    }

    pub fn menu_item(&self, item_id: &str) -> Option<&MenuItem> {
        self.menu.iter().find(|item| item.id == item_id)
    }
}
