//! # Generic Session Actor
//!
//! This module defines the `SessionActor`, the task that exclusively owns one
//! [`SessionEntity`] and serves commands from its mailbox until every client is gone.

use crate::framework::{FrameworkError, SessionClient, SessionEntity, SessionRequest};
use tokio::sync::mpsc;
use tracing::{debug, info};

/// The generic actor that owns a single session entity.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the entity and the receiver end of
/// the channel.
///
/// **Concurrency Model**:
/// Commands are processed strictly in arrival order, one at a time, so the entity needs no
/// `Mutex`. Two clients racing (say, a scheduler sending `Tick` and a user sending `Clear`)
/// are serialised by the channel: whichever message was enqueued first is applied first, and
/// the second one sees its effect.
///
/// # Usage Pattern
///
/// 1.  **Create**: `SessionActor::new(entity, buffer)` returns the actor and its client.
/// 2.  **Wire**: pass dependencies into `actor.run(context)`.
/// 3.  **Run**: spawn the future; `run` resolves to the entity once the mailbox closes.
///
/// ```rust
/// use rider_tracker::framework::{SessionActor, SessionEntity};
/// use async_trait::async_trait;
///
/// #[derive(Debug, Default)]
/// struct Counter { hits: u32 }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("never fails")]
/// struct Never;
///
/// #[async_trait]
/// impl SessionEntity for Counter {
///     type Command = u32;
///     type Reply = u32;
///     type Context = ();
///     type Error = Never;
///
///     async fn handle(&mut self, by: u32, _: &()) -> Result<u32, Never> {
///         self.hits += by;
///         Ok(self.hits)
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = SessionActor::new(Counter::default(), 8);
///     let handle = tokio::spawn(actor.run(()));
///
///     assert_eq!(client.send(2).await.unwrap(), 2);
///     assert_eq!(client.send(3).await.unwrap(), 5);
///
///     drop(client);
///     assert_eq!(handle.await.unwrap().hits, 5);
/// }
/// ```
pub struct SessionActor<T: SessionEntity> {
    receiver: mpsc::Receiver<SessionRequest<T>>,
    entity: T,
}

impl<T: SessionEntity> SessionActor<T> {
    /// Creates a new `SessionActor` around `entity` and its associated `SessionClient`.
    ///
    /// # Arguments
    ///
    /// * `entity` - The session state the actor will own.
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(entity: T, buffer_size: usize) -> (Self, SessionClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, entity };
        (actor, SessionClient::new(sender))
    }

    /// Runs the actor's event loop, processing commands until the channel closes.
    ///
    /// Returns the entity so the owner can inspect the final state after shutdown.
    pub async fn run(mut self, context: T::Context) -> T {
        // Extract just the type name (e.g., "Cart" instead of "rider_tracker::model::cart::Cart")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");
        self.entity.on_start(&context).await;

        let mut handled: u64 = 0;
        while let Some(SessionRequest {
            command,
            respond_to,
        }) = self.receiver.recv().await
        {
            debug!(entity_type, ?command, "Command");
            let result = self.entity.handle(command, &context).await.map_err(|e| {
                debug!(entity_type, error = %e, "Command rejected");
                FrameworkError::EntityError(Box::new(e))
            });
            handled += 1;
            let _ = respond_to.send(result);
        }

        self.entity.on_shutdown(&context).await;
        info!(entity_type, handled, "Shutdown");
        self.entity
    }
}
