//! Tile catalog, grid storage and the geometry shared by physics and rendering
//!
//! This module contains:
//! - Axis-aligned world boxes
//! - The tile catalog
//! - Grid storage with growth and trimming
//! - Render-ready vertex batches

/// Axis-aligned boxes in world units
pub mod bounds;
/// Growth planning, padding and border trimming of tile arrays
pub mod extension;
/// Tile grid with dynamic growth in four directions
pub mod grid;
/// Vertex batches derived from grid content
pub mod render;
/// Tile definitions and the catalog that resolves them
pub mod tiles;

pub use bounds::BoundingBox;
pub use grid::{Grid, GrowthReport};
pub use tiles::{TileCatalog, TileId, TileProperty};
