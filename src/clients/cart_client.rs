//! # Cart Client
//!
//! Provides a high-level API for the cart actor. Every method sends one [`CartCommand`].
use crate::cart_actor::{CartCommand, CartError, CartReply};
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, SessionClient};
use crate::geo::GeoPoint;
use crate::model::{Cart, CartSummary, DeliveryOption, LineId, MenuItem, PaymentMethod, PlacedOrder};
use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, info, instrument};

/// Errors surfaced by [`CartClient`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartClientError {
    #[error(transparent)]
    Cart(#[from] CartError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),

    #[error("Unexpected reply: {0}")]
    UnexpectedReply(String),
}

/// Client for interacting with the cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: SessionClient<Cart>,
}

#[async_trait]
impl ActorClient<Cart> for CartClient {
    type Error = CartClientError;

    fn inner(&self) -> &SessionClient<Cart> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.downcast_entity::<CartError>()
            .map(CartClientError::Cart)
            .unwrap_or_else(|e| CartClientError::ActorCommunicationError(e.to_string()))
    }
}

impl CartClient {
    pub fn new(inner: SessionClient<Cart>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, item), fields(item_id = %item.id))]
    pub async fn add_item(
        &self,
        item: MenuItem,
        quantity: u32,
        notes: &str,
    ) -> Result<LineId, CartClientError> {
        debug!("Adding item");
        let command = CartCommand::AddItem {
            item,
            quantity,
            notes: notes.to_string(),
        };
        expect_added(self.request(command).await?)
    }

    #[instrument(skip(self))]
    pub async fn add_from_menu(
        &self,
        restaurant_id: &str,
        item_id: &str,
        quantity: u32,
        notes: &str,
    ) -> Result<LineId, CartClientError> {
        debug!("Adding item from menu");
        let command = CartCommand::AddFromMenu {
            restaurant_id: restaurant_id.to_string(),
            item_id: item_id.to_string(),
            quantity,
            notes: notes.to_string(),
        };
        expect_added(self.request(command).await?)
    }

    pub async fn remove_item(&self, line_id: LineId) -> Result<CartSummary, CartClientError> {
        expect_summary(self.request(CartCommand::RemoveItem(line_id)).await?)
    }

    pub async fn update_quantity(
        &self,
        line_id: LineId,
        quantity: u32,
    ) -> Result<CartSummary, CartClientError> {
        let command = CartCommand::UpdateQuantity { line_id, quantity };
        expect_summary(self.request(command).await?)
    }

    /// Picks a delivery tier by id. Unknown ids fall back to standard.
    pub async fn set_delivery_option(&self, id: &str) -> Result<CartSummary, CartClientError> {
        let option = DeliveryOption::from_id_or_standard(id);
        expect_summary(self.request(CartCommand::SetDeliveryOption(option)).await?)
    }

    pub async fn clear(&self) -> Result<CartSummary, CartClientError> {
        expect_summary(self.request(CartCommand::Clear).await?)
    }

    pub async fn summary(&self) -> Result<CartSummary, CartClientError> {
        expect_summary(self.request(CartCommand::Summary).await?)
    }

    /// Submits the cart as an order delivered to `destination`.
    #[instrument(skip(self))]
    pub async fn checkout(
        &self,
        destination: GeoPoint,
        payment_method: PaymentMethod,
    ) -> Result<PlacedOrder, CartClientError> {
        info!("Sending checkout to actor");
        let command = CartCommand::Checkout {
            destination,
            payment_method,
        };
        match self.request(command).await? {
            CartReply::Placed(order) => Ok(order),
            other => Err(CartClientError::UnexpectedReply(format!("{other:?}"))),
        }
    }
}

fn expect_added(reply: CartReply) -> Result<LineId, CartClientError> {
    match reply {
        CartReply::Added(line_id) => Ok(line_id),
        other => Err(CartClientError::UnexpectedReply(format!("{other:?}"))),
    }
}

fn expect_summary(reply: CartReply) -> Result<CartSummary, CartClientError> {
    match reply {
        CartReply::Summary(summary) => Ok(summary),
        other => Err(CartClientError::UnexpectedReply(format!("{other:?}"))),
    }
}
