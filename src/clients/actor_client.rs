use crate::framework::{FrameworkError, SessionClient, SessionEntity};
use async_trait::async_trait;

/// Trait for session-specific clients to share the request plumbing.
///
/// Implementors supply the generic client and an error mapping; [`ActorClient::request`]
/// then sends a command and converts any failure into the session's own error type.
#[async_trait]
pub trait ActorClient<T: SessionEntity>: Send + Sync {
    /// The session-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic SessionClient.
    fn inner(&self) -> &SessionClient<T>;

    /// Map framework errors to the specific session error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Send one command and wait for its reply.
    #[tracing::instrument(skip(self))]
    async fn request(&self, command: T::Command) -> Result<T::Reply, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().send(command).await.map_err(Self::map_error)
    }
}
