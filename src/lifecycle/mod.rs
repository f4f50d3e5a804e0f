//! # System Lifecycle & Orchestration
//!
//! Starts a storefront session, wires its actors together, drives the delivery clock and
//! shuts it all down again.
//!
//! ## The DeliverySystem Pattern
//!
//! [`DeliverySystem::new`] does the wiring in three steps:
//!
//! ```rust,ignore
//! // 1. Create actors (no dependencies yet)
//! let (cart_actor, cart_client) = cart_actor::new(settings.mailbox_size);
//! let (tracker_actor, tracker_client) = tracker_actor::new(settings.mailbox_size);
//!
//! // 2. Start actors with their context injected
//! tokio::spawn(cart_actor.run(backend.clone()));
//! tokio::spawn(tracker_actor.run(()));
//!
//! // 3. Start the clock
//! tokio::spawn(run_scheduler(tracker.clone(), publisher.clone(), tick_interval, stop));
//! ```
//!
//! ## One Timeline
//!
//! The scheduler does not own the simulator; it is just another client of the tracker actor.
//! Its `Tick`s and the customer's `Start`/`Clear` go through the same mailbox, so:
//!
//! - a tick never runs concurrently with a start or a clear,
//! - a tick queued behind a clear fails with `InactiveSimulation`, which the scheduler ignores.
//!
//! ## Graceful Shutdown
//!
//! 1. **Stop the scheduler** - a oneshot signal, raced against the interval with `select!`
//! 2. **Drop all clients** - closes the actors' mailboxes
//! 3. **Actors drain and exit** - `on_shutdown` runs, `Shutdown` is logged
//! 4. **Await completion** - every task handle is joined
//!
//! ## Configuration & Tracing
//!
//! [`Settings`] are loaded with the `config` crate; [`setup_tracing`] installs the subscriber.

pub mod delivery_system;
pub mod settings;
pub mod tracing;

pub use self::delivery_system::*;
pub use self::settings::*;
pub use self::tracing::*;
