//! # Tracker Actor
//!
//! Puts the [`DeliveryProgressSimulator`] behind a mailbox.
//!
//! ## Overview
//!
//! The simulator is a single mutable timeline. Two parties write to it: the tick scheduler
//! (once per second) and the customer (placing an order, dismissing the tracker). Routing both
//! through one actor means their commands are applied one at a time in the order they were sent,
//! with no locking.
//!
//! ## Structure
//!
//! - [`entity`] - [`SessionEntity`](crate::framework::SessionEntity) implementation for the simulator
//! - [`error`] - [`SimulationError`]
//! - [`commands`] - [`TrackerCommand`] and [`TrackerReply`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use rider_tracker::clients::TrackerClient;
//! use rider_tracker::geo::GeoPoint;
//! use rider_tracker::model::Order;
//! use rider_tracker::tracker_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = tracker_actor::new(8);
//!     let client = TrackerClient::new(generic_client);
//!     tokio::spawn(actor.run(()));
//!
//!     let order = Order::new(
//!         "demo",
//!         GeoPoint::new(13.7469, 100.5299),
//!         GeoPoint::new(13.736717, 100.534847),
//!     );
//!     let state = client.start(order).await?;
//!     assert_eq!(state.remaining_seconds, 60);
//!
//!     let state = client.tick().await?;
//!     assert_eq!(state.remaining_seconds, 59);
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod entity;
pub mod error;

pub use commands::*;
pub use error::*;

use crate::framework::{SessionActor, SessionClient};
use crate::simulator::DeliveryProgressSimulator;

/// Creates a tracker actor with an idle simulator, and its client.
pub fn new(
    buffer_size: usize,
) -> (
    SessionActor<DeliveryProgressSimulator>,
    SessionClient<DeliveryProgressSimulator>,
) {
    SessionActor::new(DeliveryProgressSimulator::new(), buffer_size)
}
