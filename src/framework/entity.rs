//! # SessionEntity Trait
//!
//! The contract a stateful session (a shopping cart, a delivery simulation) implements to be
//! owned by a [`SessionActor`](crate::framework::SessionActor).
//!
//! # Architecture Note
//! A session is a *single* piece of mutable state with exactly one writer. Rather than a store
//! of many entities addressed by id, each actor owns one entity and feeds it commands from its
//! mailbox, one at a time. The commands and replies are associated types, so a cart client can
//! never send a tracker command and vice versa.
//!
//! # Provided Methods (Hooks)
//! - [`SessionEntity::on_start`] runs once before the first command.
//! - [`SessionEntity::on_shutdown`] runs once after the mailbox closes.
//!
//! Both default to doing nothing.

use async_trait::async_trait;
use std::fmt::Debug;

/// Trait that any session state must implement to be driven by a `SessionActor`.
///
/// # Async & Context
/// The trait is `#[async_trait]` so handlers may await other services. The `Context` type is
/// injected into every hook when the actor is started, which lets dependencies be wired
/// after the actor and its client have been created.
#[async_trait]
pub trait SessionEntity: Send + 'static {
    /// Requests the session understands.
    type Command: Send + Debug;

    /// What a successfully handled command yields.
    type Reply: Send + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this session.
    ///
    /// Errors travel back to the client boxed inside
    /// [`FrameworkError::EntityError`](crate::framework::FrameworkError::EntityError) and can be
    /// recovered with [`FrameworkError::downcast_entity`](crate::framework::FrameworkError::downcast_entity).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Called once, before the actor serves its first command.
    async fn on_start(&mut self, _ctx: &Self::Context) {}

    /// Apply one command to the session.
    async fn handle(
        &mut self,
        command: Self::Command,
        ctx: &Self::Context,
    ) -> Result<Self::Reply, Self::Error>;

    /// Called once, after the last client has been dropped.
    async fn on_shutdown(&mut self, _ctx: &Self::Context) {}
}
