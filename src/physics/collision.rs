//! Box-against-grid contact queries
//!
//! A box covers the world units `[x, x + w - 1] × [y, y + h - 1]`, which maps
//! to an inclusive span of tile indices. The maximum row is never clamped to
//! the grid: rows below the grid read as void until the virtual ground row,
//! where every query reports contact so nothing falls forever.

use num_traits::ToPrimitive;

use crate::spatial::bounds::BoundingBox;
use crate::spatial::grid::Grid;
use crate::spatial::tiles::TileProperty;

/// Inclusive range of tile indices covered by a box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSpan {
    /// Leftmost column
    pub first_column: i32,
    /// Rightmost column
    pub last_column: i32,
    /// Topmost row
    pub first_row: i32,
    /// Bottommost row
    pub last_row: i32,
}

/// Tile index containing a world coordinate
pub fn tile_index(coordinate: f32, tile_size: f32) -> i32 {
    let cell = (coordinate / tile_size).floor();
    cell.to_i32()
        .unwrap_or(if cell < 0.0 { i32::MIN } else { i32::MAX })
}

impl TileSpan {
    /// Unclamped span of a box
    pub fn of_box(bbox: &BoundingBox, tile_size: f32) -> Self {
        Self {
            first_column: tile_index(bbox.x, tile_size),
            last_column: tile_index(bbox.x + bbox.w - 1.0, tile_size),
            first_row: tile_index(bbox.y, tile_size),
            last_row: tile_index(bbox.y + bbox.h - 1.0, tile_size),
        }
    }

    /// Clamp minimums to zero and the last column to the grid width
    ///
    /// The last row stays as is.
    pub fn clamped(self, width: usize) -> Self {
        let max_column = i32::try_from(width).unwrap_or(i32::MAX) - 1;
        Self {
            first_column: self.first_column.max(0),
            last_column: self.last_column.min(max_column),
            first_row: self.first_row.max(0),
            last_row: self.last_row,
        }
    }

    /// Every `[x, y]` in the span, row by row
    pub fn cells(&self) -> impl Iterator<Item = [i32; 2]> {
        let columns = self.first_column..=self.last_column;
        (self.first_row..=self.last_row)
            .flat_map(move |y| columns.clone().map(move |x| [x, y]))
    }
}

/// Check if a box touches any tile with the given property
///
/// Returns true unconditionally once the box reaches `virtual_ground_row`,
/// whatever property is asked for. The check uses the box's inclusive last
/// row, so it fires one row later than a bound taken as `ceil(bottom / T)`.
pub fn touching(
    grid: &Grid,
    bbox: &BoundingBox,
    property: TileProperty,
    virtual_ground_row: i32,
) -> bool {
    let span = TileSpan::of_box(bbox, grid.tile_size()).clamped(grid.width());

    if span
        .cells()
        .any(|[x, y]| grid.get_tile_property(x, y) == property)
    {
        return true;
    }

    if span.last_row >= virtual_ground_row {
        log::trace!(
            "Box at ({}, {}) kept on the virtual ground (row {virtual_ground_row})",
            bbox.x,
            bbox.y
        );
        return true;
    }

    false
}
