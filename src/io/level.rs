//! Level directories: `map.txt` for the grid and `entities.json` for spawns
//!
//! The map file holds one row of tile indices per line. The entities file is
//! `{ "player": [x, y], "enemies": [[x, y], ...] }` in world units.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::io::configuration::{ENTITIES_FILE_NAME, MAP_FILE_NAME};
use crate::io::error::{LevelError, Result, file_system};
use crate::scene::world::Scene;
use crate::spatial::grid::Grid;
use crate::spatial::tiles::TileCatalog;

/// Spawn positions stored next to a map
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityLayout {
    /// Player position
    pub player: [f32; 2],
    /// Enemy positions
    #[serde(default)]
    pub enemies: Vec<[f32; 2]>,
}

impl EntityLayout {
    /// Parse an entities file's content
    ///
    /// # Errors
    ///
    /// Returns [`LevelError::EntitiesFormat`] if the text is not valid JSON
    /// for the layout
    pub fn from_json(text: &str, path: &Path) -> Result<Self> {
        serde_json::from_str(text).map_err(|source| LevelError::EntitiesFormat {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Everything needed to start a scene
#[derive(Debug, Clone)]
pub struct LevelData {
    /// The tile grid
    pub grid: Grid,
    /// Spawn positions
    pub entities: EntityLayout,
}

/// Path of the map file inside a level directory
pub fn map_path(dir: &Path) -> PathBuf {
    dir.join(MAP_FILE_NAME)
}

/// Path of the entities file inside a level directory
pub fn entities_path(dir: &Path) -> PathBuf {
    dir.join(ENTITIES_FILE_NAME)
}

/// Check if a directory holds a map file
pub fn is_level_dir(dir: &Path) -> bool {
    map_path(dir).is_file()
}

/// Load the grid and spawns of a level directory
///
/// A missing entities file puts the player at the origin with no enemies.
///
/// # Errors
///
/// Returns an error if the map cannot be read or parsed, or the entities
/// file exists but cannot be read or parsed
pub fn load_level_dir(dir: &Path, catalog: Arc<TileCatalog>) -> Result<LevelData> {
    let map_file = map_path(dir);
    let text = fs::read_to_string(&map_file).map_err(|e| file_system(&map_file, "read map", e))?;
    let grid = Grid::load(&text, catalog)?;

    let entities_file = entities_path(dir);
    let entities = if entities_file.is_file() {
        let json = fs::read_to_string(&entities_file)
            .map_err(|e| file_system(&entities_file, "read entities", e))?;
        EntityLayout::from_json(&json, &entities_file)?
    } else {
        log::warn!(
            "No {} in {}; player starts at the origin",
            ENTITIES_FILE_NAME,
            dir.display()
        );
        EntityLayout::default()
    };

    Ok(LevelData { grid, entities })
}

/// Write a scene's grid and spawn positions into a level directory
///
/// # Errors
///
/// Returns an error if the directory cannot be created or a file cannot be
/// written
pub fn save_level_dir(dir: &Path, scene: &Scene) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| file_system(dir, "create level directory", e))?;

    let map_file = map_path(dir);
    fs::write(&map_file, scene.grid().to_level_text())
        .map_err(|e| file_system(&map_file, "write map", e))?;

    let entities_file = entities_path(dir);
    let json = serde_json::to_string_pretty(&scene.entity_layout()).map_err(|source| {
        LevelError::EntitiesFormat {
            path: entities_file.clone(),
            source,
        }
    })?;
    fs::write(&entities_file, json).map_err(|e| file_system(&entities_file, "write entities", e))?;

    log::info!("Saved level to {}", dir.display());
    Ok(())
}
