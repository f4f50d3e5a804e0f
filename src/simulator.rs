//! # Delivery Progress Simulator
//!
//! Moves a pretend rider from the restaurant to the customer over a fixed one-minute window.
//!
//! ## Timeline
//!
//! The countdown starts at [`TOTAL_DURATION`] seconds and loses one second per [`tick`]:
//!
//! | remaining | status            |
//! |-----------|-------------------|
//! | 60..51    | `SearchingRider`  |
//! | 50..21    | `RiderFound`      |
//! | 20..1     | `RiderPickedUp`   |
//! | 0         | `Arrived`         |
//!
//! The rider position is a straight-line interpolation between origin and destination.
//! Progress reaches 1.0 [`ARRIVAL_LEAD`] seconds before the countdown does, so the rider is
//! parked at the door for the last few ticks.
//!
//! ## Inactive policy
//!
//! [`tick`] and [`snapshot`] on a simulator with no run (never started, or cleared) return
//! [`SimulationError::InactiveSimulation`]. A run that has arrived is still a run: ticking it
//! returns the unchanged terminal state until [`clear`] is called.
//!
//! [`tick`]: DeliveryProgressSimulator::tick
//! [`snapshot`]: DeliveryProgressSimulator::snapshot
//! [`clear`]: DeliveryProgressSimulator::clear

use crate::geo::{GeoPoint, Viewport};
use crate::model::{Order, SimulationState, StatusLabel};
use crate::tracker_actor::SimulationError;
use tracing::{debug, info};

/// Length of a simulated delivery, in ticks (seconds).
pub const TOTAL_DURATION: u32 = 60;

/// How many seconds before the countdown ends the rider reaches the destination.
pub const ARRIVAL_LEAD: u32 = 5;

/// Remaining seconds at which a rider accepts the order.
pub const RIDER_FOUND_AT: u32 = 50;

/// Remaining seconds at which the rider leaves the restaurant with the food.
pub const RIDER_PICKED_UP_AT: u32 = 20;

/// Fraction of the trip completed with `remaining_seconds` left on the clock.
pub fn progress_at(remaining_seconds: u32) -> f64 {
    let elapsed = TOTAL_DURATION.saturating_sub(remaining_seconds);
    (elapsed as f64 / (TOTAL_DURATION - ARRIVAL_LEAD) as f64).min(1.0)
}

/// Status reached when the countdown lands on `remaining_seconds`, if that is a threshold.
fn transition_at(remaining_seconds: u32) -> Option<StatusLabel> {
    match remaining_seconds {
        RIDER_FOUND_AT => Some(StatusLabel::RiderFound),
        RIDER_PICKED_UP_AT => Some(StatusLabel::RiderPickedUp),
        0 => Some(StatusLabel::Arrived),
        _ => None,
    }
}

struct ActiveRun {
    order: Order,
    origin: GeoPoint,
    destination: GeoPoint,
    state: SimulationState,
}

/// Frames the customer, the restaurant and the rider.
fn fit_viewport(destination: GeoPoint, origin: GeoPoint, rider: GeoPoint) -> Viewport {
    Viewport::enclosing(destination, &[origin, rider])
}

/// Owns at most one running delivery simulation.
///
/// Single writer: the simulator is meant to live inside one task (the tracker actor) and be
/// driven by one scheduler. Callers only ever see cloned [`SimulationState`] snapshots.
#[derive(Default)]
pub struct DeliveryProgressSimulator {
    active: Option<ActiveRun>,
}

impl DeliveryProgressSimulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts tracking `order`, replacing any run in progress.
    ///
    /// # Errors
    /// [`SimulationError::InvalidOrder`] if the restaurant origin or the destination is missing
    /// or not finite. The previous run, if any, is left untouched in that case.
    pub fn start(&mut self, order: Order) -> Result<SimulationState, SimulationError> {
        let origin = validated(&order, order.restaurant_origin, "restaurant origin")?;
        let destination = validated(&order, order.destination, "destination")?;

        if let Some(previous) = self.active.take() {
            info!(
                order_id = %previous.order.order_id,
                remaining = previous.state.remaining_seconds,
                "Replacing run in progress"
            );
        }

        let state = SimulationState {
            order_id: order.order_id.clone(),
            remaining_seconds: TOTAL_DURATION,
            status: StatusLabel::SearchingRider,
            rider_position: origin,
            viewport: fit_viewport(destination, origin, origin),
        };
        let run = ActiveRun {
            order,
            origin,
            destination,
            state,
        };

        info!(order_id = %run.order.order_id, %origin, %destination, "Simulation started");
        let snapshot = run.state.clone();
        self.active = Some(run);
        Ok(snapshot)
    }

    /// Advances the active run by one second.
    ///
    /// # Errors
    /// [`SimulationError::InactiveSimulation`] if there is no run.
    pub fn tick(&mut self) -> Result<SimulationState, SimulationError> {
        let run = self
            .active
            .as_mut()
            .ok_or(SimulationError::InactiveSimulation)?;

        if run.state.is_terminal() {
            return Ok(run.state.clone());
        }

        run.state.remaining_seconds -= 1;
        let remaining = run.state.remaining_seconds;

        if let Some(status) = transition_at(remaining) {
            run.state.status = status;
            if status == StatusLabel::Arrived {
                run.order.completed = true;
            }
            info!(order_id = %run.order.order_id, remaining, %status, "Status changed");
        }

        let rider = run.origin.lerp(run.destination, progress_at(remaining));
        if rider != run.state.rider_position {
            run.state.rider_position = rider;
            run.state.viewport = fit_viewport(run.destination, run.origin, rider);
        }

        debug!(order_id = %run.order.order_id, remaining, rider = %run.state.rider_position, "Tick");
        Ok(run.state.clone())
    }

    /// Current state of the active run.
    pub fn snapshot(&self) -> Result<SimulationState, SimulationError> {
        self.active
            .as_ref()
            .map(|run| run.state.clone())
            .ok_or(SimulationError::InactiveSimulation)
    }

    /// Discards the active run and returns its order (with `completed` set if it arrived).
    pub fn clear(&mut self) -> Option<Order> {
        let run = self.active.take()?;
        info!(
            order_id = %run.order.order_id,
            completed = run.order.completed,
            "Simulation cleared"
        );
        Some(run.order)
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// The order being tracked, if any.
    pub fn order(&self) -> Option<&Order> {
        self.active.as_ref().map(|run| &run.order)
    }
}

fn validated(order: &Order, point: Option<GeoPoint>, field: &'static str) -> Result<GeoPoint, SimulationError> {
    point
        .filter(GeoPoint::is_finite)
        .ok_or_else(|| SimulationError::InvalidOrder {
            order_id: order.order_id.clone(),
            field,
        })
}
