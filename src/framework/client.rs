//! # Generic Client
//!
//! This module defines the generic client for communicating with a session actor.

use crate::framework::{FrameworkError, SessionEntity, SessionRequest};
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `SessionActor`.
///
/// * **Cloneable** – holds only a sender, so cloning is inexpensive.
/// * **Async API** – `send` resolves to `Result<T::Reply, FrameworkError>`.
/// * **Liveness** – the actor keeps running for as long as at least one clone exists.
pub struct SessionClient<T: SessionEntity> {
    sender: mpsc::Sender<SessionRequest<T>>,
}

impl<T: SessionEntity> Clone for SessionClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: SessionEntity> SessionClient<T> {
    pub fn new(sender: mpsc::Sender<SessionRequest<T>>) -> Self {
        Self { sender }
    }

    /// Enqueues `command` and waits for the actor's reply.
    pub async fn send(&self, command: T::Command) -> Result<T::Reply, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest {
                command,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}
