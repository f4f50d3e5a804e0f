//! # Rider Tracker
//!
//! > **A food-delivery storefront session with a simulated rider.**
//!
//! A customer fills a cart from a mock restaurant catalog and checks out. The order is then
//! "delivered" by the [`DeliveryProgressSimulator`](simulator::DeliveryProgressSimulator): over
//! sixty simulated seconds a rider is found, picks the food up and rides in a straight line
//! from the restaurant to the customer, with a map viewport that keeps all three in frame.
//!
//! ## Core Concepts
//!
//! ### Single-writer sessions
//! The cart and the simulator are each owned by one [`SessionActor`](framework::SessionActor).
//! Everything that changes them, including the once-a-second tick, is a message in that
//! actor's mailbox and is applied in order.
//!
//! ### Snapshots out
//! Nothing outside the tracker actor holds a reference into the simulation. Callers receive
//! cloned [`SimulationState`](model::SimulationState)s, and the
//! [`DeliverySystem`](lifecycle::DeliverySystem) republishes them on a `watch` channel.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic actor, its client, the error type and test mocks.
//! - **Key items**: [`SessionEntity`](framework::SessionEntity), [`SessionActor`](framework::SessionActor).
//!
//! ### 2. The Domain ([`geo`], [`model`], [`simulator`], [`backend`])
//! Plain data and synchronous logic with no knowledge of actors.
//!
//! ### 3. The Actors ([`cart_actor`], [`tracker_actor`])
//! `SessionEntity` implementations plus their commands and errors.
//!
//! ### 4. The Interface ([`clients`])
//! [`CartClient`](clients::CartClient) and [`TrackerClient`](clients::TrackerClient) hide the
//! message passing and recover each actor's typed errors.
//!
//! ### 5. The Orchestrator ([`lifecycle`])
//! Settings, tracing, and the [`DeliverySystem`](lifecycle::DeliverySystem) that wires it all.
//!
//! ## Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! # One simulated second per 100ms
//! RIDER_TRACKER_TICK_INTERVAL_MS=100 cargo run
//! ```

pub mod backend;
pub mod cart_actor;
pub mod clients;
pub mod framework;
pub mod geo;
pub mod lifecycle;
pub mod model;
pub mod simulator;
pub mod tracker_actor;
