//! Tile grid, collision and movement core of a 2D platformer
//!
//! A level is a dynamically sized grid of tiles that grows when a tile is
//! placed outside it and trims empty borders when tiles are removed.
//! Characters move through it with axis-separated collision resolution and a
//! small vertical state machine (grounded, falling, jumping, climbing).

#![forbid(unsafe_code)]

/// Level editing operations: tile placement and character management
pub mod editor;
/// Input/output operations, configuration and error handling
pub mod io;
/// Collision queries and movement resolution
pub mod physics;
/// Characters and the per-tick scene update
pub mod scene;
/// Tile catalog, grid storage and render batches
pub mod spatial;

pub use io::error::{LevelError, Result};
