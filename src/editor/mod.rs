//! Level editing operations driven by an external editor

/// Teleporting the player and adding or removing enemies
pub mod entities;
/// Tile placement and removal with origin-shift translation
pub mod placement;
