//! # Mailbox Messages
//!
//! The envelope a [`SessionClient`](crate::framework::SessionClient) puts on the channel: the
//! command itself and a one-shot sender for the reply.

use crate::framework::{FrameworkError, SessionEntity};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// One queued command together with the channel its result goes back on.
#[derive(Debug)]
pub struct SessionRequest<T: SessionEntity> {
    pub command: T::Command,
    pub respond_to: Response<T::Reply>,
}
