//! # Cart Actor
//!
//! Owns the storefront session's single [`Cart`] and feeds it [`CartCommand`]s.
//!
//! ## Structure
//!
//! - [`entity`] - [`SessionEntity`](crate::framework::SessionEntity) implementation for [`Cart`]
//! - [`error`] - [`CartError`] type for type-safe error handling
//! - [`commands`] - [`CartCommand`] and [`CartReply`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Dependencies
//!
//! The actor runs with an `Arc<MockBackend>` as its context. Catalog lookups
//! ([`CartCommand::AddFromMenu`]) and checkout go through it.
//!
//! ```rust
//! use rider_tracker::backend::MockBackend;
//! use rider_tracker::cart_actor;
//! use rider_tracker::clients::CartClient;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = cart_actor::new(8);
//!     let client = CartClient::new(generic_client);
//!     tokio::spawn(actor.run(Arc::new(MockBackend::new())));
//!
//!     client.add_from_menu("2", "m3", 2, "not too spicy").await?;
//!     let summary = client.summary().await?;
//!     assert_eq!(summary.total_price, 2 * 50 + 30);
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod entity;
pub mod error;

pub use commands::*;
pub use error::*;

use crate::framework::{SessionActor, SessionClient};
use crate::model::Cart;

/// Creates a cart actor with an empty cart, and its client.
pub fn new(buffer_size: usize) -> (SessionActor<Cart>, SessionClient<Cart>) {
    SessionActor::new(Cart::new(), buffer_size)
}
