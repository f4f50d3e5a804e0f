//! Generic actor framework for single-writer sessions.
//!
//! This module provides the building blocks for putting one piece of mutable state behind a
//! mailbox, so that every mutation is applied by exactly one task in arrival order.
//!
//! # Main Components
//!
//! - [`SessionEntity`] - Trait that session types implement to be owned by an actor
//! - [`SessionActor`] - Generic actor that owns the entity and drains its mailbox
//! - [`SessionClient`] - Cloneable handle for sending commands and awaiting replies
//! - [`FrameworkError`] - Mailbox failures, plus the boxed entity error
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::SessionActor;
pub use client::SessionClient;
pub use entity::SessionEntity;
pub use error::FrameworkError;
pub use message::{Response, SessionRequest};
