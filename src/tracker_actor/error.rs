//! Error types for the tracker actor.

use crate::model::OrderId;
use thiserror::Error;

/// Errors the delivery simulator reports back to its callers.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SimulationError {
    /// The order cannot be simulated because a required location is missing or not finite.
    #[error("Order {order_id} cannot be tracked: {field} is missing or invalid")]
    InvalidOrder {
        order_id: OrderId,
        field: &'static str,
    },

    /// There is no run to advance or inspect.
    #[error("No delivery simulation is running")]
    InactiveSimulation,
}
