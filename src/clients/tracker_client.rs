//! # Tracker Client
//!
//! High-level API for the tracker actor. Wraps a `SessionClient<DeliveryProgressSimulator>` and
//! unpacks [`TrackerReply`] into the value each call promises.

use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, SessionClient};
use crate::model::{Order, SimulationState};
use crate::simulator::DeliveryProgressSimulator;
use crate::tracker_actor::{SimulationError, TrackerCommand, TrackerReply};
use async_trait::async_trait;
use thiserror::Error;
use tracing::{debug, instrument};

/// Errors surfaced by [`TrackerClient`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TrackerError {
    /// The simulator refused the command.
    #[error(transparent)]
    Simulation(#[from] SimulationError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),

    /// The actor answered with a reply that does not belong to the command.
    #[error("Unexpected reply: {0}")]
    UnexpectedReply(String),
}

impl TrackerError {
    pub fn is_inactive(&self) -> bool {
        matches!(self, TrackerError::Simulation(SimulationError::InactiveSimulation))
    }
}

/// Client for interacting with the tracker actor.
#[derive(Clone)]
pub struct TrackerClient {
    inner: SessionClient<DeliveryProgressSimulator>,
}

#[async_trait]
impl ActorClient<DeliveryProgressSimulator> for TrackerClient {
    type Error = TrackerError;

    fn inner(&self) -> &SessionClient<DeliveryProgressSimulator> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.downcast_entity::<SimulationError>()
            .map(TrackerError::Simulation)
            .unwrap_or_else(|e| TrackerError::ActorCommunicationError(e.to_string()))
    }
}

impl TrackerClient {
    pub fn new(inner: SessionClient<DeliveryProgressSimulator>) -> Self {
        Self { inner }
    }

    /// Starts tracking `order`, replacing whatever was running.
    #[instrument(skip(self, order), fields(order_id = %order.order_id))]
    pub async fn start(&self, order: Order) -> Result<SimulationState, TrackerError> {
        debug!("Starting simulation");
        let reply = self.request(TrackerCommand::Start(order)).await?;
        expect_state(reply)
    }

    pub async fn tick(&self) -> Result<SimulationState, TrackerError> {
        let reply = self.request(TrackerCommand::Tick).await?;
        expect_state(reply)
    }

    pub async fn snapshot(&self) -> Result<SimulationState, TrackerError> {
        let reply = self.request(TrackerCommand::Snapshot).await?;
        expect_state(reply)
    }

    /// Discards the run. Returns the order that was being tracked, if any.
    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<Option<Order>, TrackerError> {
        match self.request(TrackerCommand::Clear).await? {
            TrackerReply::Cleared(order) => Ok(order),
            other => Err(TrackerError::UnexpectedReply(format!("{other:?}"))),
        }
    }
}

fn expect_state(reply: TrackerReply) -> Result<SimulationState, TrackerError> {
    match reply {
        TrackerReply::State(state) => Ok(state),
        other => Err(TrackerError::UnexpectedReply(format!("{other:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_command, MockClient};
    use crate::geo::{GeoPoint, Viewport};
    use crate::model::StatusLabel;

    fn state(remaining_seconds: u32) -> SimulationState {
        let point = GeoPoint::new(13.7469, 100.5299);
        SimulationState {
            order_id: "mock-1".into(),
            remaining_seconds,
            status: StatusLabel::SearchingRider,
            rider_position: point,
            viewport: Viewport::enclosing(point, &[]),
        }
    }

    #[tokio::test]
    async fn tick_unpacks_state() {
        let (client, mut receiver) = create_mock_client::<DeliveryProgressSimulator>(4);
        let tracker = TrackerClient::new(client);

        let pending = tokio::spawn(async move { tracker.tick().await });

        let (command, respond_to) = expect_command(&mut receiver).await.unwrap();
        assert!(matches!(command, TrackerCommand::Tick));
        respond_to.send(Ok(TrackerReply::State(state(59)))).unwrap();

        assert_eq!(pending.await.unwrap().unwrap().remaining_seconds, 59);
    }

    #[tokio::test]
    async fn simulation_errors_survive_the_mailbox() {
        let mut mock = MockClient::<DeliveryProgressSimulator>::new();
        mock.expect(|cmd| matches!(cmd, TrackerCommand::Tick))
            .return_err(FrameworkError::EntityError(Box::new(
                SimulationError::InactiveSimulation,
            )));

        let err = TrackerClient::new(mock.client()).tick().await.unwrap_err();
        assert!(err.is_inactive());
        mock.verify();
    }

    #[tokio::test]
    async fn closed_actor_is_a_communication_error() {
        let mut mock = MockClient::<DeliveryProgressSimulator>::new();
        mock.expect_any().return_err(FrameworkError::ActorClosed);

        let err = TrackerClient::new(mock.client()).snapshot().await.unwrap_err();
        assert_eq!(
            err,
            TrackerError::ActorCommunicationError("Actor closed".to_string())
        );
        mock.verify();
    }

    #[tokio::test]
    async fn mismatched_reply_is_reported() {
        let mut mock = MockClient::<DeliveryProgressSimulator>::new();
        mock.expect_any().return_ok(TrackerReply::Cleared(None));

        let err = TrackerClient::new(mock.client()).tick().await.unwrap_err();
        assert!(matches!(err, TrackerError::UnexpectedReply(_)));
        mock.verify();
    }
}
