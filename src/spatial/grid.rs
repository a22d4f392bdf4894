//! Tile grid with dynamic growth in four directions and border trimming
//!
//! The grid stores [`TileId`]s in an `ndarray` indexed `[y, x]`. Reads outside
//! the grid return the catalog's default tile. Writes outside the grid grow it
//! first; writing a void tile trims fully empty borders afterwards. Any change
//! to cells or dimensions bumps the generation counter, which invalidates the
//! render cache.

use std::sync::Arc;

use ndarray::Array2;

use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{LevelError, Result, invalid_parameter};
use crate::spatial::extension::{calculate_extension, extend_array_2d, trim_empty_borders};
use crate::spatial::render::VertexBatch;
use crate::spatial::tiles::{TileCatalog, TileId, TileProperty};

/// Outcome of a [`Grid::set_tile`] call
///
/// Shifts are in cells: positive when cells were added at the left/top edge,
/// negative when they were trimmed away. Anything positioned in grid space
/// must move by `origin_shift × tile_size` to stay over the same tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GrowthReport {
    /// The left edge moved (growth or trim)
    pub new_col_left: bool,
    /// The top edge moved (growth or trim)
    pub new_row_top: bool,
    /// Signed column and row shift of the origin
    pub origin_shift: [i32; 2],
    /// Change in `[width, height]`
    pub size_change: [i32; 2],
    /// Whether any cell or dimension changed
    pub changed: bool,
}

impl GrowthReport {
    /// World-space translation matching the origin shift
    pub fn translation(&self, tile_size: f32) -> [f32; 2] {
        [
            self.origin_shift[0] as f32 * tile_size,
            self.origin_shift[1] as f32 * tile_size,
        ]
    }

    /// True when dependent objects must be translated
    pub const fn shifts_origin(&self) -> bool {
        self.new_col_left || self.new_row_top
    }
}

#[derive(Debug, Clone, Default)]
struct RenderCache {
    generation: Option<u64>,
    batch: VertexBatch,
}

/// Rectangular tile store for one level
#[derive(Debug, Clone)]
pub struct Grid {
    catalog: Arc<TileCatalog>,
    cells: Array2<TileId>,
    generation: u64,
    render_cache: RenderCache,
}

impl Grid {
    /// A 0×0 grid
    pub fn empty(catalog: Arc<TileCatalog>) -> Self {
        let default_tile = catalog.default_tile();
        Self {
            catalog,
            cells: Array2::from_elem((0, 0), default_tile),
            generation: 0,
            render_cache: RenderCache::default(),
        }
    }

    /// Parse a level from rows of single-character tile indices
    ///
    /// Whitespace inside a line is ignored. Width comes from the first row,
    /// height from the row count; trailing blank lines are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`LevelError::MalformedLevel`] if a row's length differs from
    /// the first row's, [`LevelError::UnknownTileIndex`] if a character has
    /// no catalog entry, or an invalid parameter error if a dimension exceeds
    /// the grid limit
    pub fn load(text: &str, catalog: Arc<TileCatalog>) -> Result<Self> {
        let mut rows: Vec<Vec<char>> = text
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect())
            .collect();
        while rows.last().is_some_and(Vec::is_empty) {
            rows.pop();
        }

        let width = rows.first().map_or(0, Vec::len);
        let height = rows.len();
        if width > MAX_GRID_DIMENSION || height > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                "level dimensions",
                &format!("{width}x{height}"),
                &format!("each dimension must be at most {MAX_GRID_DIMENSION}"),
            ));
        }

        let mut ids = Vec::with_capacity(width * height);
        for (row, chars) in rows.iter().enumerate() {
            if chars.len() != width {
                return Err(LevelError::MalformedLevel {
                    row,
                    expected: width,
                    found: chars.len(),
                });
            }
            for (column, &index) in chars.iter().enumerate() {
                let id = catalog
                    .resolve(index)
                    .ok_or(LevelError::UnknownTileIndex { index, row, column })?;
                ids.push(id);
            }
        }

        let cells = Array2::from_shape_vec((height, width), ids).map_err(|e| {
            invalid_parameter("level dimensions", &format!("{width}x{height}"), &e)
        })?;

        log::info!("Loaded {width}x{height} level grid");

        Ok(Self {
            catalog,
            cells,
            generation: 0,
            render_cache: RenderCache::default(),
        })
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// `[width, height]` in cells
    pub fn dimensions(&self) -> [usize; 2] {
        [self.width(), self.height()]
    }

    /// Catalog the grid's ids refer to
    pub const fn catalog(&self) -> &Arc<TileCatalog> {
        &self.catalog
    }

    /// Tile edge length in world units
    pub fn tile_size(&self) -> f32 {
        self.catalog.tile_size()
    }

    /// Counter bumped by every mutation
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Check if `(x, y)` lies inside the grid
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.cell_index(x, y).is_some()
    }

    fn cell_index(&self, x: i32, y: i32) -> Option<[usize; 2]> {
        let column = usize::try_from(x).ok()?;
        let row = usize::try_from(y).ok()?;
        (column < self.width() && row < self.height()).then_some([row, column])
    }

    /// Tile at `(x, y)`; the default tile anywhere outside the grid
    pub fn get_tile(&self, x: i32, y: i32) -> TileId {
        self.cell_index(x, y)
            .and_then(|index| self.cells.get(index))
            .copied()
            .unwrap_or_else(|| self.catalog.default_tile())
    }

    /// File index of the tile at `(x, y)`
    pub fn get_tile_index(&self, x: i32, y: i32) -> char {
        self.catalog.file_index(self.get_tile(x, y))
    }

    /// Physical property of the tile at `(x, y)`
    pub fn get_tile_property(&self, x: i32, y: i32) -> TileProperty {
        self.catalog.property(self.get_tile(x, y))
    }

    /// Size of the grid in world units
    pub fn get_world_size(&self) -> [f32; 2] {
        let tile_size = self.tile_size();
        [
            self.width() as f32 * tile_size,
            self.height() as f32 * tile_size,
        ]
    }

    /// Write a tile, growing or trimming the grid as needed
    ///
    /// Writing the current tile is a no-op, as is writing the default tile
    /// outside the grid. Writing any other tile outside the grid first grows
    /// it to include `(x, y)`, filling new cells with the default tile. After
    /// writing a tile whose property is Void, fully default border columns
    /// and rows are trimmed (never below 1×1).
    pub fn set_tile(&mut self, x: i32, y: i32, tile: TileId) -> GrowthReport {
        let default_tile = self.catalog.default_tile();
        let old_dims = self.dimensions();
        let mut report = GrowthReport::default();
        let mut target = [x, y];

        if !self.contains(x, y) {
            if tile == default_tile {
                return report;
            }

            let info = calculate_extension(old_dims, target);
            let [new_width, new_height] = info.extended_dims(old_dims);
            if new_width > MAX_GRID_DIMENSION || new_height > MAX_GRID_DIMENSION {
                log::error!(
                    "Refusing to grow grid to {new_width}x{new_height} for tile at ({x}, {y})"
                );
                return report;
            }

            log::debug!(
                "Growing grid {}x{} -> {new_width}x{new_height} (left {}, top {}, right {}, bottom {})",
                old_dims[0],
                old_dims[1],
                info.pad_left,
                info.pad_top,
                info.pad_right,
                info.pad_bottom
            );

            self.cells = extend_array_2d(&self.cells, &info, default_tile);
            report.origin_shift = [info.pad_left as i32, info.pad_top as i32];
            target = [x + info.pad_left as i32, y + info.pad_top as i32];
        }

        let Some(cell) = self
            .cell_index(target[0], target[1])
            .and_then(|index| self.cells.get_mut(index))
        else {
            log::error!("Grid growth did not cover ({x}, {y}); ignoring write");
            return report;
        };

        if *cell == tile {
            return report;
        }
        *cell = tile;

        if self.catalog.property(tile) == TileProperty::Void
            && let Some((trimmed, trim)) = trim_empty_borders(&self.cells, &default_tile)
        {
            log::debug!(
                "Trimmed empty borders (left {}, top {}, right {}, bottom {})",
                trim.left,
                trim.top,
                trim.right,
                trim.bottom
            );
            self.cells = trimmed;
            report.origin_shift[0] -= trim.left as i32;
            report.origin_shift[1] -= trim.top as i32;
        }

        let new_dims = self.dimensions();
        report.new_col_left = report.origin_shift[0] != 0;
        report.new_row_top = report.origin_shift[1] != 0;
        report.size_change = [
            new_dims[0] as i32 - old_dims[0] as i32,
            new_dims[1] as i32 - old_dims[1] as i32,
        ];
        report.changed = true;
        self.generation += 1;

        report
    }

    /// Serialise the grid as level text, tile indices separated by spaces
    pub fn to_level_text(&self) -> String {
        let mut text = String::with_capacity(self.width() * self.height() * 2);
        for row in self.cells.rows() {
            let line: Vec<String> = row
                .iter()
                .map(|&tile| self.catalog.file_index(tile).to_string())
                .collect();
            text.push_str(&line.join(" "));
            text.push('\n');
        }
        text
    }

    /// Whether the render cache matches the current grid content
    pub fn is_render_cache_fresh(&self) -> bool {
        self.render_cache.generation == Some(self.generation)
    }

    /// Vertex batch for the current content, rebuilt only when stale
    pub fn render_batch(&mut self) -> &VertexBatch {
        if !self.is_render_cache_fresh() {
            self.regenerate_render_cache();
        }
        &self.render_cache.batch
    }

    /// Rebuild the vertex batch unconditionally
    pub fn regenerate_render_cache(&mut self) -> &VertexBatch {
        self.render_cache = RenderCache {
            generation: Some(self.generation),
            batch: VertexBatch::build(&self.cells, &self.catalog),
        };
        &self.render_cache.batch
    }
}
