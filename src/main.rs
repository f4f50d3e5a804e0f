use rider_tracker::lifecycle::{setup_tracing, DeliverySystem, Settings};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let settings = Settings::load().map_err(|e| e.to_string())?;
    info!(?settings, "Starting rider tracker");

    let system = DeliverySystem::new(settings);

    let span = tracing::info_span!("shopping");
    async {
        system.cart.add_from_menu("1", "m1", 2, "extra spicy").await?;
        system.cart.add_from_menu("1", "m2", 1, "").await?;
        system.cart.set_delivery_option("priority").await
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    let summary = system.cart.summary().await.map_err(|e| e.to_string())?;
    info!(
        items = summary.total_items,
        fee = summary.delivery_fee,
        total = summary.total_price,
        "Cart ready"
    );

    let mut updates = system.subscribe();
    match system.place_order(None).await {
        Ok(state) => info!(order_id = %state.order_id, eta = %state.countdown_label(), "Order placed"),
        Err(e) => {
            error!(error = %e, "Order failed");
            system.shutdown().await?;
            return Err(e.to_string());
        }
    }

    while updates.changed().await.is_ok() {
        let Some(state) = updates.borrow_and_update().clone() else {
            break;
        };
        info!(
            remaining = %state.countdown_label(),
            status = %state.status,
            rider = %state.rider_position,
            "{}",
            state.status.message()
        );
        if state.is_terminal() {
            break;
        }
    }

    if let Ok(Some(order)) = system.dismiss().await.map_err(|e| error!(error = %e, "Dismiss failed")) {
        info!(order_id = %order.order_id, completed = order.completed, "Delivery finished");
    }

    system.shutdown().await?;
    info!("Application completed successfully");
    Ok(())
}
