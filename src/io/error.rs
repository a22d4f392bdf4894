//! Error types for level loading, catalog parsing and movement resolution

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for all level and simulation operations
#[derive(Debug, Error)]
pub enum LevelError {
    /// A level row does not match the width established by the first row
    #[error("Malformed level: row {row} has {found} tiles, expected {expected}")]
    MalformedLevel {
        /// Zero-based row index of the offending line
        row: usize,
        /// Width established by the first row
        expected: usize,
        /// Width of the offending row after whitespace removal
        found: usize,
    },

    /// A level character has no catalog entry
    #[error("Unknown tile index '{index}' at row {row}, column {column}")]
    UnknownTileIndex {
        /// The unresolved file index
        index: char,
        /// Zero-based row of the character
        row: usize,
        /// Zero-based column of the character
        column: usize,
    },

    /// The catalog defines no tile for the void marker
    #[error("Tile catalog has no default tile (marker '{marker}')")]
    MissingDefaultTile {
        /// File index expected for the default tile
        marker: char,
    },

    /// A catalog record cannot be turned into a tile definition
    #[error("Malformed tile record #{position}: {reason}")]
    MalformedTileRecord {
        /// Position of the record in the catalog file
        position: usize,
        /// Description of what's wrong with the record
        reason: String,
    },

    /// Requested displacement is not a finite vector
    #[error("Invalid displacement ({dx}, {dy})")]
    InvalidDisplacement {
        /// Requested horizontal displacement
        dx: f32,
        /// Requested vertical displacement
        dy: f32,
    },

    /// Entity hitbox has non-finite coordinates or a non-positive size
    #[error("Invalid hitbox [{x}, {y}, {w}, {h}]")]
    InvalidHitbox {
        /// Left edge
        x: f32,
        /// Top edge
        y: f32,
        /// Width
        w: f32,
        /// Height
        h: f32,
    },

    /// Parameter validation failed
    #[error("Invalid parameter '{parameter}' = '{value}': {reason}")]
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Catalog file is not valid JSON for the catalog format
    #[error("Failed to parse tile catalog '{}': {source}", path.display())]
    CatalogFormat {
        /// Path of the catalog file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Entities file is not valid JSON for the entities format
    #[error("Failed to parse entities file '{}': {source}", path.display())]
    EntitiesFormat {
        /// Path of the entities file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Configuration file is not valid TOML for the simulation config
    #[error("Failed to parse configuration '{}': {source}", path.display())]
    ConfigFormat {
        /// Path of the configuration file
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },

    /// Failed to load an atlas image
    #[error("Failed to load image '{}': {source}", path.display())]
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a preview image
    #[error("Failed to export image to '{}': {source}", path.display())]
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    #[error("File system error during {operation} on '{}': {source}", path.display())]
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

/// Convenience type alias for level results
pub type Result<T> = std::result::Result<T, LevelError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> LevelError {
    LevelError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error for an operation on a path
pub fn file_system(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> LevelError {
    LevelError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
