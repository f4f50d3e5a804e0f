use crate::backend::MockBackend;
use crate::cart_actor;
use crate::clients::{CartClient, CartClientError, TrackerClient, TrackerError};
use crate::geo::GeoPoint;
use crate::lifecycle::Settings;
use crate::model::{Order, OrderId, PaymentMethod, SimulationState};
use crate::tracker_actor;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, info, warn};

/// Failures of the end-to-end flows on [`DeliverySystem`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DeliveryError {
    #[error("Checkout failed: {0}")]
    Cart(#[from] CartClientError),

    #[error("Tracking failed: {0}")]
    Tracker(#[from] TrackerError),
}

/// The `watch` side of the system, plus the order its snapshots are allowed to come from.
///
/// Start replies and tick replies race each other out of the tracker actor, and either can
/// arrive after the customer has moved on. Only states of the tracked order are shown, and for
/// one order the countdown shown never goes back up.
#[derive(Debug)]
struct Publisher {
    snapshots: watch::Sender<Option<SimulationState>>,
    tracked: Mutex<Option<OrderId>>,
}

impl Publisher {
    fn new() -> Self {
        let (snapshots, _) = watch::channel(None);
        Self {
            snapshots,
            tracked: Mutex::new(None),
        }
    }

    fn tracked(&self) -> std::sync::MutexGuard<'_, Option<OrderId>> {
        self.tracked.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// From now on, accept states of `order_id` and nothing else.
    fn track(&self, order_id: OrderId) {
        *self.tracked() = Some(order_id);
    }

    /// Stop accepting states. Call before clearing the tracker.
    fn untrack(&self) {
        *self.tracked() = None;
    }

    /// Takes the dismissed order off screen.
    fn clear(&self) {
        self.snapshots.send_replace(None);
    }

    /// Publishes `state` if it belongs to the tracked order and moves its countdown forward
    /// (or is the first state shown for it). Returns whether subscribers were notified.
    fn publish(&self, state: SimulationState) -> bool {
        self.snapshots.send_if_modified(|current| {
            let is_tracked = self.tracked().as_ref() == Some(&state.order_id);
            let advances = match current {
                Some(shown) if shown.order_id == state.order_id => {
                    state.remaining_seconds <= shown.remaining_seconds && *shown != state
                }
                _ => true,
            };
            if is_tracked && advances {
                *current = Some(state);
            }
            is_tracked && advances
        })
    }
}

/// One storefront session: the cart, the delivery tracker and the clock that drives it.
///
/// The tracker is ticked by a scheduler task owned by the system. Snapshots are published on a
/// `watch` channel; subscribers see `Some(state)` while an order is being tracked and `None`
/// once it has been dismissed.
pub struct DeliverySystem {
    pub cart: CartClient,
    pub tracker: TrackerClient,
    pub backend: Arc<MockBackend>,
    settings: Settings,
    publisher: Arc<Publisher>,
    stop_scheduler: oneshot::Sender<()>,
    scheduler: JoinHandle<()>,
    actors: Vec<JoinHandle<()>>,
}

impl DeliverySystem {
    /// Spawns the actors and the tick scheduler. Must be called inside a tokio runtime.
    pub fn new(settings: Settings) -> Self {
        let backend = Arc::new(MockBackend::new());

        let (cart_actor, cart_client) = cart_actor::new(settings.mailbox_size);
        let (tracker_actor, tracker_client) = tracker_actor::new(settings.mailbox_size);

        let cart_ctx = backend.clone();
        let actors = vec![
            tokio::spawn(async move {
                cart_actor.run(cart_ctx).await;
            }),
            tokio::spawn(async move {
                tracker_actor.run(()).await;
            }),
        ];

        let cart = CartClient::new(cart_client);
        let tracker = TrackerClient::new(tracker_client);
        let publisher = Arc::new(Publisher::new());

        let (stop_scheduler, stop) = oneshot::channel();
        let scheduler = tokio::spawn(run_scheduler(
            tracker.clone(),
            publisher.clone(),
            settings.tick_interval(),
            stop,
        ));

        info!(tick_ms = settings.tick_interval_ms, "Delivery system started");
        Self {
            cart,
            tracker,
            backend,
            settings,
            publisher,
            stop_scheduler,
            scheduler,
            actors,
        }
    }

    /// Checks out the cart and starts tracking the resulting order.
    ///
    /// Without a `destination` the order goes to `settings.user_location`. If the backend's
    /// reply carries no restaurant origin, `settings.default_origin` is used and a warning is
    /// logged.
    pub async fn place_order(
        &self,
        destination: Option<GeoPoint>,
    ) -> Result<SimulationState, DeliveryError> {
        let destination = destination.unwrap_or_else(|| {
            debug!(location = %self.settings.user_location, "No destination given, using user location");
            self.settings.user_location
        });

        let placed = self
            .cart
            .checkout(destination, PaymentMethod::default())
            .await?;

        let mut order = Order::from(&placed).with_destination_or(destination);
        if order.restaurant_origin.is_none() {
            warn!(
                order_id = %order.order_id,
                fallback = %self.settings.default_origin,
                "Order has no restaurant origin, using default"
            );
            order = order.with_origin_or(self.settings.default_origin);
        }

        self.publisher.track(order.order_id.clone());
        let state = self.tracker.start(order).await?;
        self.publisher.publish(state.clone());
        info!(order_id = %state.order_id, "Tracking order");
        Ok(state)
    }

    /// Receiver for simulation snapshots. Only changed snapshots are published.
    pub fn subscribe(&self) -> watch::Receiver<Option<SimulationState>> {
        self.publisher.snapshots.subscribe()
    }

    /// The latest published snapshot.
    pub fn current(&self) -> Option<SimulationState> {
        self.publisher.snapshots.borrow().clone()
    }

    /// Stops tracking. Returns the order that was tracked, if any.
    pub async fn dismiss(&self) -> Result<Option<Order>, DeliveryError> {
        self.publisher.untrack();
        let order = self.tracker.clear().await?;
        self.publisher.clear();
        Ok(order)
    }

    /// Stops the scheduler, then closes every mailbox and waits for the actors to finish.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down delivery system");
        let Self {
            cart,
            tracker,
            stop_scheduler,
            scheduler,
            actors,
            ..
        } = self;

        let _ = stop_scheduler.send(());
        scheduler.await.map_err(|e| e.to_string())?;

        drop(cart);
        drop(tracker);
        for handle in actors {
            handle.await.map_err(|e| e.to_string())?;
        }
        info!("Delivery system stopped");
        Ok(())
    }
}

/// Ticks the tracker every `period` until `stop` fires or the tracker goes away.
async fn run_scheduler(
    tracker: TrackerClient,
    publisher: Arc<Publisher>,
    period: Duration,
    mut stop: oneshot::Receiver<()>,
) {
    let mut ticker = time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick of an interval completes immediately.
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = &mut stop => break,
            _ = ticker.tick() => match tracker.tick().await {
                Ok(state) => {
                    publisher.publish(state);
                }
                Err(e) if e.is_inactive() => {}
                Err(e) => {
                    warn!(error = %e, "Tick failed, stopping scheduler");
                    break;
                }
            },
        }
    }
    debug!("Scheduler stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Viewport;
    use crate::model::StatusLabel;

    fn state(order_id: &str, remaining_seconds: u32) -> SimulationState {
        let point = GeoPoint::new(13.7469, 100.5299);
        SimulationState {
            order_id: order_id.into(),
            remaining_seconds,
            status: StatusLabel::SearchingRider,
            rider_position: point,
            viewport: Viewport::enclosing(point, &[]),
        }
    }

    #[test]
    fn tick_before_start_reply_is_kept() {
        let publisher = Publisher::new();
        let receiver = publisher.snapshots.subscribe();
        publisher.track("a".into());

        // The scheduler's first tick of the new run is answered before the start reply.
        assert!(publisher.publish(state("a", 59)));
        assert!(!publisher.publish(state("a", 60)));
        assert_eq!(receiver.borrow().as_ref().map(|s| s.remaining_seconds), Some(59));

        assert!(publisher.publish(state("a", 58)));
        assert_eq!(receiver.borrow().as_ref().map(|s| s.remaining_seconds), Some(58));
    }

    #[test]
    fn states_of_other_orders_are_dropped() {
        let publisher = Publisher::new();
        let receiver = publisher.snapshots.subscribe();

        assert!(!publisher.publish(state("a", 59)));
        assert_eq!(*receiver.borrow(), None);

        publisher.track("b".into());
        assert!(publisher.publish(state("b", 60)));
        assert!(!publisher.publish(state("a", 10)));
        assert_eq!(receiver.borrow().as_ref().map(|s| s.order_id.0.as_str()), Some("b"));
    }

    #[test]
    fn late_tick_after_dismiss_is_dropped() {
        let publisher = Publisher::new();
        let receiver = publisher.snapshots.subscribe();
        publisher.track("a".into());
        publisher.publish(state("a", 60));

        publisher.untrack();
        assert!(!publisher.publish(state("a", 59)));
        publisher.clear();
        assert_eq!(*receiver.borrow(), None);
    }

    #[test]
    fn unchanged_state_is_not_republished() {
        let publisher = Publisher::new();
        let mut receiver = publisher.snapshots.subscribe();
        publisher.track("a".into());
        publisher.publish(state("a", 0));
        receiver.borrow_and_update();

        assert!(!publisher.publish(state("a", 0)));
        assert!(!receiver.has_changed().unwrap());
    }
}
