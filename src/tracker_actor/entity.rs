//! [`SessionEntity`] implementation for the [`DeliveryProgressSimulator`].

use super::{SimulationError, TrackerCommand, TrackerReply};
use crate::framework::SessionEntity;
use crate::simulator::DeliveryProgressSimulator;
use async_trait::async_trait;
use tracing::info;

#[async_trait]
impl SessionEntity for DeliveryProgressSimulator {
    type Command = TrackerCommand;
    type Reply = TrackerReply;
    type Context = ();
    type Error = SimulationError;

    async fn handle(
        &mut self,
        command: TrackerCommand,
        _ctx: &(),
    ) -> Result<TrackerReply, SimulationError> {
        match command {
            TrackerCommand::Start(order) => self.start(order).map(TrackerReply::State),
            TrackerCommand::Tick => self.tick().map(TrackerReply::State),
            TrackerCommand::Snapshot => self.snapshot().map(TrackerReply::State),
            TrackerCommand::Clear => Ok(TrackerReply::Cleared(self.clear())),
        }
    }

    async fn on_shutdown(&mut self, _ctx: &()) {
        if let Some(order) = self.order() {
            info!(order_id = %order.order_id, completed = order.completed, "Abandoning run at shutdown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::GeoPoint;
    use crate::model::{Order, StatusLabel};

    fn order() -> Order {
        Order::new("t-1", GeoPoint::new(13.7469, 100.5299), GeoPoint::new(13.7367, 100.5348))
    }

    #[tokio::test]
    async fn commands_map_onto_simulator() {
        let mut sim = DeliveryProgressSimulator::new();

        let started = sim.handle(TrackerCommand::Start(order()), &()).await.unwrap();
        let TrackerReply::State(state) = started else {
            panic!("expected state, got {started:?}");
        };
        assert_eq!(state.remaining_seconds, 60);

        let ticked = sim.handle(TrackerCommand::Tick, &()).await.unwrap();
        let TrackerReply::State(state) = ticked else {
            panic!("expected state, got {ticked:?}");
        };
        assert_eq!(state.remaining_seconds, 59);
        assert_eq!(state.status, StatusLabel::SearchingRider);

        let cleared = sim.handle(TrackerCommand::Clear, &()).await.unwrap();
        assert!(matches!(cleared, TrackerReply::Cleared(Some(o)) if o.order_id.0 == "t-1"));
    }

    #[tokio::test]
    async fn tick_without_run_is_an_error() {
        let mut sim = DeliveryProgressSimulator::new();
        assert_eq!(
            sim.handle(TrackerCommand::Tick, &()).await.unwrap_err(),
            SimulationError::InactiveSimulation
        );
        assert_eq!(
            sim.handle(TrackerCommand::Clear, &()).await.unwrap(),
            TrackerReply::Cleared(None)
        );
    }
}
