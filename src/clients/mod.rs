//! Type-safe wrappers around [`SessionClient`](crate::framework::SessionClient).

pub mod actor_client;
pub mod cart_client;
pub mod tracker_client;

pub use actor_client::*;
pub use cart_client::*;
pub use tracker_client::*;
