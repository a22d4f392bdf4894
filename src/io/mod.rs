//! File formats, configuration, errors and the command-line front end

/// Tile catalog files
pub mod catalog;
/// Command-line interface and batch level runner
pub mod cli;
/// Constants and simulation settings
pub mod configuration;
/// Error types
pub mod error;
/// PNG previews
pub mod image;
/// Level directory loading and saving
pub mod level;
/// Logger setup
pub mod logging;
/// Progress bars for batch runs
pub mod progress;
