//! Snapshot types produced by the delivery simulator.
//!
//! # Actor Framework
//! [`SimulationState`] is what the tracker actor hands back on every `Start` and `Tick`
//! command. It is a plain clone of the simulator's internal state, so a caller holding one can
//! never mutate the live run.

use crate::geo::{GeoPoint, Viewport};
use crate::model::OrderId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Where a delivery stands. Transitions only ever move forward, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StatusLabel {
    SearchingRider,
    RiderFound,
    RiderPickedUp,
    Arrived,
}

impl StatusLabel {
    /// Text shown to the customer for this status.
    pub fn message(&self) -> &'static str {
        match self {
            StatusLabel::SearchingRider => "Searching for a rider...",
            StatusLabel::RiderFound => "Rider found! Heading to the restaurant...",
            StatusLabel::RiderPickedUp => "Rider picked up your food and is on the way...",
            StatusLabel::Arrived => "Your rider has arrived! Enjoy your meal.",
        }
    }
}

impl Display for StatusLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            StatusLabel::SearchingRider => "SEARCHING_RIDER",
            StatusLabel::RiderFound => "RIDER_FOUND",
            StatusLabel::RiderPickedUp => "RIDER_PICKED_UP",
            StatusLabel::Arrived => "ARRIVED",
        };
        f.write_str(label)
    }
}

/// Renderable state of the active delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    pub order_id: OrderId,
    pub remaining_seconds: u32,
    pub status: StatusLabel,
    pub rider_position: GeoPoint,
    pub viewport: Viewport,
}

impl SimulationState {
    /// The countdown has run out; further ticks change nothing.
    pub fn is_terminal(&self) -> bool {
        self.remaining_seconds == 0
    }

    /// Remaining time as `m:ss`.
    pub fn countdown_label(&self) -> String {
        format!(
            "{}:{:02}",
            self.remaining_seconds / 60,
            self.remaining_seconds % 60
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(remaining_seconds: u32) -> SimulationState {
        let here = GeoPoint::new(13.7469, 100.5299);
        SimulationState {
            order_id: OrderId::from("mock-1"),
            remaining_seconds,
            status: StatusLabel::SearchingRider,
            rider_position: here,
            viewport: Viewport::enclosing(here, &[]),
        }
    }

    #[test]
    fn countdown_label_pads_seconds() {
        assert_eq!(state(60).countdown_label(), "1:00");
        assert_eq!(state(59).countdown_label(), "0:59");
        assert_eq!(state(5).countdown_label(), "0:05");
        assert_eq!(state(0).countdown_label(), "0:00");
    }

    #[test]
    fn status_order_matches_lifecycle() {
        assert!(StatusLabel::SearchingRider < StatusLabel::RiderFound);
        assert!(StatusLabel::RiderFound < StatusLabel::RiderPickedUp);
        assert!(StatusLabel::RiderPickedUp < StatusLabel::Arrived);
        assert_eq!(StatusLabel::RiderPickedUp.to_string(), "RIDER_PICKED_UP");
    }
}
