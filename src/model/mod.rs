//! Pure data structures shared across the storefront and the delivery tracker.

pub mod cart;
pub mod delivery;
pub mod order;
pub mod restaurant;

pub use cart::*;
pub use delivery::*;
pub use order::*;
pub use restaurant::*;
