//! # Observability & Tracing
//!
//! Structured logging for the whole session: actors, clients, the tick scheduler.
//!
//! ## Configuration
//!
//! The output is compact and hides module paths (`with_target(false)`); each actor tags its
//! lines with an `entity_type` field instead. Levels come from `RUST_LOG`, defaulting to `info`.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: `Actor started` and `Shutdown` with the number of commands handled
//! - **Simulation**: start, every status change, clear, and (at `debug`) each tick
//! - **Storefront**: checkout and the echoed order
//! - **Client calls**: `#[instrument]` spans around each client method
//!
//! ## Usage Examples
//!
//! ```bash
//! # Status changes only
//! RUST_LOG=info cargo run
//!
//! # Every tick and every command payload
//! RUST_LOG=debug cargo run
//!
//! # Just the simulator
//! RUST_LOG=rider_tracker::simulator=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug` the actors log each command once as it arrives:
//!
//! ```text
//! DEBUG entity_type="DeliveryProgressSimulator" command=Tick Command
//! DEBUG order_id=mock-1718000000000 remaining=42 rider=(13.7441, 100.5313) Tick
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Call once, at the top of `main`.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
