//! Collision queries, the vertical state machine and movement resolution

/// Box-against-grid contact queries with a virtual ground
pub mod collision;
/// Axis-separated resolution of requested displacements
pub mod movement;
/// Vertical states, climb directions and intents
pub mod state;

pub use movement::{MovementResolver, Resolution};
pub use state::{ClimbDirection, Facing, Intent, VerticalState};
