//! Render-ready vertex batches derived from grid content
//!
//! A batch holds four vertices per visible tile, in the order top-left,
//! top-right, bottom-right, bottom-left. Texture coordinates are atlas pixels,
//! so a renderer binding the single shared atlas can draw the batch as-is.

use ndarray::Array2;

use crate::spatial::tiles::{TileCatalog, TileId, TileProperty};

/// Vertices emitted per tile quad
pub const VERTICES_PER_QUAD: usize = 4;

/// One corner of a tile quad
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vertex {
    /// World position in pixels
    pub position: [f32; 2],
    /// Atlas position in pixels
    pub tex_coords: [f32; 2],
}

/// Flat list of quads for every non-void cell
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VertexBatch {
    vertices: Vec<Vertex>,
}

impl VertexBatch {
    /// Build the batch for a tile array indexed `[row, column]`
    pub fn build(cells: &Array2<TileId>, catalog: &TileCatalog) -> Self {
        let tile_size = catalog.tile_size();
        let mut batch = Self::default();

        for ((row, column), &tile) in cells.indexed_iter() {
            if catalog.property(tile) == TileProperty::Void {
                continue;
            }
            batch.push_quad([column, row], tile_size, catalog.tex_coords(tile));
        }

        batch
    }

    /// Append the quad of the cell at `[x, y]`
    pub fn push_quad(&mut self, cell: [usize; 2], tile_size: f32, atlas_offset: [i32; 2]) {
        let left = cell[0] as f32 * tile_size;
        let top = cell[1] as f32 * tile_size;
        let tex_left = atlas_offset[0] as f32;
        let tex_top = atlas_offset[1] as f32;

        let corners = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
        self.vertices.extend(corners.iter().map(|[u, v]| Vertex {
            position: [left + u * tile_size, top + v * tile_size],
            tex_coords: [tex_left + u * tile_size, tex_top + v * tile_size],
        }));
    }

    /// All vertices, four per quad
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Iterate quads as groups of four vertices
    pub fn quads(&self) -> impl Iterator<Item = &[Vertex]> {
        self.vertices.chunks_exact(VERTICES_PER_QUAD)
    }

    /// Number of quads in the batch
    pub const fn quad_count(&self) -> usize {
        self.vertices.len() / VERTICES_PER_QUAD
    }

    /// True when no tile is drawn
    pub const fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
