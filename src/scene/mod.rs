//! Characters, their movement settings and the per-tick scene update

/// Seeded random intents for headless runs
pub mod autopilot;
/// Capability traits and the character type
pub mod entity;
/// Enum-keyed draw layers
pub mod layers;
/// Speeds turning states into displacements
pub mod locomotion;
/// The scene owning grid and characters
pub mod world;

pub use world::{EntityId, Scene};
