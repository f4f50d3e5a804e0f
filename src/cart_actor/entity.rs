//! [`SessionEntity`] implementation for the [`Cart`].
//!
//! The context is the backend, which the cart needs for catalog lookups and for checkout.

use super::{CartCommand, CartError, CartReply};
use crate::backend::MockBackend;
use crate::framework::SessionEntity;
use crate::model::Cart;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

#[async_trait]
impl SessionEntity for Cart {
    type Command = CartCommand;
    type Reply = CartReply;
    type Context = Arc<MockBackend>;
    type Error = CartError;

    async fn handle(
        &mut self,
        command: CartCommand,
        backend: &Arc<MockBackend>,
    ) -> Result<CartReply, CartError> {
        match command {
            CartCommand::AddItem {
                item,
                quantity,
                notes,
            } => Ok(CartReply::Added(self.add_item(&item, quantity, &notes)?)),
            CartCommand::AddFromMenu {
                restaurant_id,
                item_id,
                quantity,
                notes,
            } => {
                let item = backend.menu_item(&restaurant_id, &item_id)?;
                Ok(CartReply::Added(self.add_item(item, quantity, &notes)?))
            }
            CartCommand::RemoveItem(line_id) => {
                self.remove_item(line_id)?;
                Ok(CartReply::Summary(self.summary()))
            }
            CartCommand::UpdateQuantity { line_id, quantity } => {
                self.update_quantity(line_id, quantity)?;
                Ok(CartReply::Summary(self.summary()))
            }
            CartCommand::SetDeliveryOption(option) => {
                self.set_delivery_option(option);
                Ok(CartReply::Summary(self.summary()))
            }
            CartCommand::Clear => {
                self.clear();
                Ok(CartReply::Summary(self.summary()))
            }
            CartCommand::Summary => Ok(CartReply::Summary(self.summary())),
            CartCommand::Checkout {
                destination,
                payment_method,
            } => {
                let request = self.order_request(destination, payment_method)?;
                debug!(total = request.total_price, "Submitting order");
                let placed = backend.create_order(request)?;
                self.clear();
                info!(order_id = %placed.order_id, "Checked out");
                Ok(CartReply::Placed(placed))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::BackendError;
    use crate::geo::GeoPoint;
    use crate::model::PaymentMethod;

    #[tokio::test]
    async fn add_from_menu_uses_catalog_price() {
        let backend = Arc::new(MockBackend::new());
        let mut cart = Cart::new();

        let reply = cart
            .handle(
                CartCommand::AddFromMenu {
                    restaurant_id: "8".to_string(),
                    item_id: "m19".to_string(),
                    quantity: 2,
                    notes: String::new(),
                },
                &backend,
            )
            .await
            .unwrap();
        assert!(matches!(reply, CartReply::Added(_)));
        assert_eq!(cart.total_price(), 2 * 120 + 30);
    }

    #[tokio::test]
    async fn add_from_unknown_item_fails() {
        let backend = Arc::new(MockBackend::new());
        let mut cart = Cart::new();

        let err = cart
            .handle(
                CartCommand::AddFromMenu {
                    restaurant_id: "8".to_string(),
                    item_id: "m1".to_string(),
                    quantity: 1,
                    notes: String::new(),
                },
                &backend,
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CartError::Backend(BackendError::MenuItemNotFound { .. })
        ));
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn oversized_quantity_is_an_error_not_a_crash() {
        let backend = Arc::new(MockBackend::new());
        let mut cart = Cart::new();
        let add = |quantity| CartCommand::AddFromMenu {
            restaurant_id: "6".to_string(),
            item_id: "m12".to_string(),
            quantity,
            notes: String::new(),
        };

        cart.handle(add(1), &backend).await.unwrap();
        let err = cart.handle(add(u32::MAX), &backend).await.unwrap_err();
        assert_eq!(
            err,
            CartError::QuantityTooLarge {
                item_id: "m12".to_string(),
                quantity: u32::MAX,
            }
        );

        let reply = cart.handle(CartCommand::Summary, &backend).await.unwrap();
        let CartReply::Summary(summary) = reply else {
            panic!("expected summary, got {reply:?}");
        };
        assert_eq!(summary.total_items, 1);
        assert_eq!(summary.total_price, 300 + 30);
    }

    #[tokio::test]
    async fn checkout_empties_cart_only_on_success() {
        let backend = Arc::new(MockBackend::new());
        let home = GeoPoint::new(13.736717, 100.534847);
        let mut cart = Cart::new();
        let checkout = || CartCommand::Checkout {
            destination: home,
            payment_method: PaymentMethod::Cash,
        };

        assert_eq!(
            cart.handle(checkout(), &backend).await.unwrap_err(),
            CartError::EmptyCart
        );

        let item = backend.menu_item("1", "m2").unwrap().clone();
        cart.add_item(&item, 1, "").unwrap();
        let reply = cart.handle(checkout(), &backend).await.unwrap();

        let CartReply::Placed(placed) = reply else {
            panic!("expected placed order, got {reply:?}");
        };
        assert_eq!(placed.request.total_price, 55 + 30);
        assert_eq!(placed.request.delivery_location, Some(home));
        assert!(cart.is_empty());
    }
}
