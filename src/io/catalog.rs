//! Tile catalog files
//!
//! ```json
//! { "tileSize": 50, "tiles": [ { "name": "air", "index": ".", "texCoords": [0, 0], "property": "Void" } ] }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::io::configuration::DEFAULT_TILE_SIZE;
use crate::io::error::{LevelError, Result, file_system};
use crate::spatial::tiles::{TileCatalog, TileRecord};

const fn default_tile_size() -> f32 {
    DEFAULT_TILE_SIZE
}

/// On-disk shape of a catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFile {
    /// Tile edge length in world units and atlas pixels
    #[serde(default = "default_tile_size")]
    pub tile_size: f32,
    /// Tile definitions in file order
    pub tiles: Vec<TileRecord>,
}

impl CatalogFile {
    /// Build the catalog described by this file
    ///
    /// # Errors
    ///
    /// Returns an error if a record is malformed, the tile size is invalid or
    /// no default tile is defined
    pub fn into_catalog(self) -> Result<TileCatalog> {
        TileCatalog::from_records(self.tiles, self.tile_size)
    }
}

fn parse(json: &str, path: &Path) -> Result<TileCatalog> {
    let file: CatalogFile =
        serde_json::from_str(json).map_err(|source| LevelError::CatalogFormat {
            path: path.to_path_buf(),
            source,
        })?;
    let catalog = file.into_catalog()?;
    log::info!(
        "Loaded {} tile definitions ({} warnings)",
        catalog.len(),
        catalog.warnings().len()
    );
    Ok(catalog)
}

/// Parse a catalog from JSON text
///
/// # Errors
///
/// Returns [`LevelError::CatalogFormat`] for invalid JSON, or any error of
/// [`TileCatalog::from_records`]
pub fn load_catalog_from_str(json: &str) -> Result<TileCatalog> {
    parse(json, Path::new("<inline>"))
}

/// Read and parse a catalog file
///
/// # Errors
///
/// Returns an error if the file cannot be read or holds an invalid catalog
pub fn load_catalog_from_path(path: &Path) -> Result<TileCatalog> {
    let json = std::fs::read_to_string(path).map_err(|e| file_system(path, "read catalog", e))?;
    parse(&json, path)
}
