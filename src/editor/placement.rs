//! Tile edits that keep the scene aligned with a growing or shrinking grid

use crate::physics::collision::tile_index;
use crate::scene::world::Scene;
use crate::spatial::grid::GrowthReport;
use crate::spatial::tiles::TileId;

/// What a tile edit does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    /// Write this tile
    Place(TileId),
    /// Write the default tile
    Remove,
}

/// Tile coordinates containing a world position
pub fn world_to_tile(position: [f32; 2], tile_size: f32) -> [i32; 2] {
    [
        tile_index(position[0], tile_size),
        tile_index(position[1], tile_size),
    ]
}

/// Apply a tile edit and translate the scene if the grid origin moved
///
/// Characters and the camera move by the report's origin shift so they stay
/// over the same tiles.
pub fn apply_tile_edit(scene: &mut Scene, tile: [i32; 2], action: EditAction) -> GrowthReport {
    let tile_id = match action {
        EditAction::Place(id) => id,
        EditAction::Remove => scene.catalog().default_tile(),
    };

    let report = scene.grid_mut().set_tile(tile[0], tile[1], tile_id);

    if report.shifts_origin() {
        let [dx, dy] = report.translation(scene.grid().tile_size());
        log::debug!("Translating scene by ({dx}, {dy}) after origin shift");
        scene.translate_all(dx, dy);
    }

    report
}

/// Tile under a world position, for picking a tile to place
pub fn pick_tile(scene: &Scene, position: [f32; 2]) -> TileId {
    let [x, y] = world_to_tile(position, scene.grid().tile_size());
    scene.grid().get_tile(x, y)
}
