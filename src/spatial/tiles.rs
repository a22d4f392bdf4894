//! Tile catalog mapping file indices to physical properties and atlas cells
//!
//! The catalog is immutable once loaded. Recoverable problems in the tile
//! definitions (duplicate indices, unknown property names) are logged and kept
//! as [`CatalogWarning`]s; only a missing default tile is fatal.

use crate::io::configuration::{DEFAULT_TILE_MARKER, DEFAULT_TILE_SIZE};
use crate::io::error::{LevelError, Result, invalid_parameter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How entities interact with a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TileProperty {
    /// Passable, not drawn
    #[default]
    Void,
    /// Blocks movement
    Solid,
    /// Climbable
    Ladder,
}

impl FromStr for TileProperty {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Void" => Ok(Self::Void),
            "Solid" => Ok(Self::Solid),
            "Ladder" => Ok(Self::Ladder),
            other => Err(other.to_string()),
        }
    }
}

/// Index of a tile definition inside its catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(usize);

impl TileId {
    /// Position of the definition in the catalog
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A fully parsed tile definition
#[derive(Debug, Clone, PartialEq)]
pub struct TileDefinition {
    /// Human readable name for tooling
    pub name: Option<String>,
    /// Character representing the tile in level files
    pub file_index: char,
    /// Top-left corner of the tile's cell in the atlas, in pixels
    pub tex_coords: [i32; 2],
    /// Physical nature of the tile
    pub property: TileProperty,
}

/// A tile definition as written in a catalog file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileRecord {
    /// Optional display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Single-character file index (only the first character is used)
    pub index: String,
    /// Atlas offset `[x, y]` in pixels
    pub tex_coords: [i32; 2],
    /// One of `Void`, `Solid`, `Ladder`
    pub property: String,
}

/// Recoverable problem found while building a catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogWarning {
    /// Two definitions share a file index; the later one wins
    DuplicateTileIndex {
        /// The shared file index
        index: char,
        /// Definition that is now shadowed
        shadowed: TileId,
        /// Definition that resolves from now on
        winner: TileId,
    },
    /// A property string is not recognised; the tile becomes Void
    UnknownTileProperty {
        /// File index of the affected tile
        index: char,
        /// The unrecognised property string
        value: String,
    },
}

impl fmt::Display for CatalogWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateTileIndex {
                index,
                shadowed,
                winner,
            } => write!(
                f,
                "Tile index '{index}' is used by definitions #{} and #{}; the later one wins",
                shadowed.index(),
                winner.index()
            ),
            Self::UnknownTileProperty { index, value } => {
                write!(f, "Tile '{index}' has unknown property '{value}'; using Void")
            }
        }
    }
}

/// Registry of every tile a level may reference
#[derive(Debug, Clone)]
pub struct TileCatalog {
    tiles: Vec<TileDefinition>,
    default_tile: TileId,
    tile_size: f32,
    warnings: Vec<CatalogWarning>,
}

impl TileCatalog {
    /// Build a catalog from parsed definitions using the default tile size
    ///
    /// # Errors
    ///
    /// Returns [`LevelError::MissingDefaultTile`] if no definition uses the
    /// default marker
    pub fn load(definitions: impl IntoIterator<Item = TileDefinition>) -> Result<Self> {
        Self::build(definitions, DEFAULT_TILE_SIZE, Vec::new())
    }

    /// Build a catalog from file records
    ///
    /// Unknown property strings become [`TileProperty::Void`] with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if a record has an empty index, the tile size is not a
    /// positive finite number, or no record uses the default marker
    pub fn from_records(
        records: impl IntoIterator<Item = TileRecord>,
        tile_size: f32,
    ) -> Result<Self> {
        let mut warnings = Vec::new();
        let mut definitions = Vec::new();

        for (position, record) in records.into_iter().enumerate() {
            let file_index =
                record
                    .index
                    .chars()
                    .next()
                    .ok_or_else(|| LevelError::MalformedTileRecord {
                        position,
                        reason: "empty index string".to_string(),
                    })?;

            let property = record.property.parse().unwrap_or_else(|value: String| {
                let warning = CatalogWarning::UnknownTileProperty {
                    index: file_index,
                    value,
                };
                log::warn!("{warning}");
                warnings.push(warning);
                TileProperty::Void
            });

            definitions.push(TileDefinition {
                name: record.name,
                file_index,
                tex_coords: record.tex_coords,
                property,
            });
        }

        Self::build(definitions, tile_size, warnings)
    }

    fn build(
        definitions: impl IntoIterator<Item = TileDefinition>,
        tile_size: f32,
        mut warnings: Vec<CatalogWarning>,
    ) -> Result<Self> {
        if !tile_size.is_finite() || tile_size <= 1.0 {
            return Err(invalid_parameter(
                "tile_size",
                &tile_size,
                &"must be a finite size greater than one world unit",
            ));
        }

        let mut tiles: Vec<TileDefinition> = Vec::new();
        for definition in definitions {
            let winner = TileId(tiles.len());
            if let Some(shadowed) = tiles
                .iter()
                .rposition(|t| t.file_index == definition.file_index)
            {
                let warning = CatalogWarning::DuplicateTileIndex {
                    index: definition.file_index,
                    shadowed: TileId(shadowed),
                    winner,
                };
                log::warn!("{warning}");
                warnings.push(warning);
            }
            tiles.push(definition);
        }

        let default_tile = tiles
            .iter()
            .rposition(|t| t.file_index == DEFAULT_TILE_MARKER)
            .map(TileId)
            .ok_or(LevelError::MissingDefaultTile {
                marker: DEFAULT_TILE_MARKER,
            })?;

        Ok(Self {
            tiles,
            default_tile,
            tile_size,
            warnings,
        })
    }

    /// Find the tile for a file index
    ///
    /// Linear scan; when an index is duplicated the later definition wins.
    pub fn resolve(&self, file_index: char) -> Option<TileId> {
        self.tiles
            .iter()
            .rposition(|t| t.file_index == file_index)
            .map(TileId)
    }

    /// The void/default tile
    pub const fn default_tile(&self) -> TileId {
        self.default_tile
    }

    /// Definition behind a tile id
    pub fn definition(&self, id: TileId) -> Option<&TileDefinition> {
        self.tiles.get(id.0)
    }

    /// Physical property of a tile; ids from another catalog read as Void
    pub fn property(&self, id: TileId) -> TileProperty {
        self.definition(id).map_or(TileProperty::Void, |t| t.property)
    }

    /// Atlas offset of a tile
    pub fn tex_coords(&self, id: TileId) -> [i32; 2] {
        self.definition(id).map_or([0, 0], |t| t.tex_coords)
    }

    /// File index of a tile, falling back to the default marker
    pub fn file_index(&self, id: TileId) -> char {
        self.definition(id)
            .map_or(DEFAULT_TILE_MARKER, |t| t.file_index)
    }

    /// Tile edge length in world units (and atlas pixels)
    pub const fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// Number of definitions, duplicates included
    pub const fn len(&self) -> usize {
        self.tiles.len()
    }

    /// True when the catalog holds no definitions
    pub const fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// All definitions with their ids
    pub fn iter(&self) -> impl Iterator<Item = (TileId, &TileDefinition)> {
        self.tiles.iter().enumerate().map(|(i, t)| (TileId(i), t))
    }

    /// Warnings raised while building the catalog
    pub fn warnings(&self) -> &[CatalogWarning] {
        &self.warnings
    }
}
