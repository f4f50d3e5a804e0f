//! Commands understood by the tracker actor.
//!
//! Every command maps onto one [`DeliveryProgressSimulator`](crate::simulator::DeliveryProgressSimulator)
//! method. Because they share one mailbox, a `Tick` enqueued behind a `Clear` sees the cleared
//! simulator and fails with `InactiveSimulation` instead of reviving the run.

use crate::model::{Order, SimulationState};

#[derive(Debug, Clone)]
pub enum TrackerCommand {
    /// Starts (or restarts) tracking an order.
    Start(Order),
    /// Advances the clock by one second.
    Tick,
    /// Reads the current state without advancing.
    Snapshot,
    /// Discards the run.
    Clear,
}

/// Replies - `State` for `Start`/`Tick`/`Snapshot`, `Cleared` for `Clear`.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackerReply {
    State(SimulationState),
    /// The discarded order, or `None` if nothing was running.
    Cleared(Option<Order>),
}
