//! Simulation constants and runtime configuration defaults

use crate::io::error::{LevelError, Result, file_system, invalid_parameter};
use crate::scene::locomotion::Locomotion;
use serde::{Deserialize, Serialize};
use std::path::Path;

// Tile and grid settings
/// Edge length of a tile in world units when the catalog does not say otherwise
pub const DEFAULT_TILE_SIZE: f32 = 50.0;
/// File index reserved for the void/default tile
pub const DEFAULT_TILE_MARKER: char = '.';
/// Row index acting as an invisible floor below every level
pub const DEFAULT_VIRTUAL_GROUND_ROW: i32 = 200;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Movement resolution
/// Gap kept between a clamped step and a full tile, so a step never skips a tile
pub const STEP_EPSILON: f32 = 1.0;
/// Downward probe used to detect walking off a ledge
pub const GROUND_PROBE_DISTANCE: f32 = 2.0;

// Characters
/// Maximum and initial hit points of a character
pub const MAX_HP: u32 = 100;
/// Damage dealt to the player by touching an enemy
pub const CONTACT_DAMAGE: u32 = 20;
/// Invincibility granted after taking contact damage
pub const INVINCIBILITY_SECONDS: f32 = 1.0;
/// Player hitbox size in world units
pub const PLAYER_HITBOX_SIZE: [f32; 2] = [40.0, 40.0];
/// Enemy hitbox size in world units
pub const ENEMY_HITBOX_SIZE: [f32; 2] = [40.0, 40.0];

// Default locomotion, in world units per second
/// Horizontal walking speed
pub const DEFAULT_WALK_SPEED: f32 = 200.0;
/// Falling speed
pub const DEFAULT_FALL_SPEED: f32 = 400.0;
/// Rising speed while jumping
pub const DEFAULT_JUMP_SPEED: f32 = 450.0;
/// Seconds a jump keeps rising before turning into a fall
pub const DEFAULT_JUMP_DURATION: f32 = 0.35;
/// Ladder climbing speed
pub const DEFAULT_CLIMB_SPEED: f32 = 150.0;

// Runtime settings
/// Fixed seed for reproducible headless runs
pub const DEFAULT_SEED: u64 = 42;
/// Default number of ticks simulated per level
pub const DEFAULT_TICKS: usize = 600;
/// Default duration of one tick in seconds
pub const DEFAULT_TICK_SECONDS: f32 = 1.0 / 60.0;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Level directory layout
/// Grid file inside a level directory
pub const MAP_FILE_NAME: &str = "map.txt";
/// Entities file inside a level directory
pub const ENTITIES_FILE_NAME: &str = "entities.json";
/// Catalog file looked up next to the target when none is given
pub const CATALOG_FILE_NAME: &str = "tiles.json";
/// Preview image written into a level directory
pub const PREVIEW_FILE_NAME: &str = "preview.png";

/// Tuning of the movement resolver
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Distance kept below a full tile when clamping a step
    pub step_epsilon: f32,
    /// Downward probe used by the ledge check
    pub ground_probe_distance: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            step_epsilon: STEP_EPSILON,
            ground_probe_distance: GROUND_PROBE_DISTANCE,
        }
    }
}

/// Everything a scene needs besides its level data
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Movement resolver settings
    pub physics: PhysicsConfig,
    /// Character speeds
    pub locomotion: Locomotion,
    /// Row index of the invisible floor
    pub virtual_ground_row: i32,
    /// Duration of one tick in seconds
    pub tick_seconds: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            physics: PhysicsConfig::default(),
            locomotion: Locomotion::default(),
            virtual_ground_row: DEFAULT_VIRTUAL_GROUND_ROW,
            tick_seconds: DEFAULT_TICK_SECONDS,
        }
    }
}

impl SimulationConfig {
    /// Parse a configuration from TOML text, filling missing keys with defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML for this structure or
    /// the tick duration is not a positive finite number
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|source| LevelError::ConfigFormat {
            path: "<inline>".into(),
            source,
        })?;
        config.validate()
    }

    /// Load a configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or holds
    /// invalid values
    pub fn from_toml_path(path: &Path) -> Result<Self> {
        let text =
            std::fs::read_to_string(path).map_err(|e| file_system(path, "read config", e))?;
        let config: Self = toml::from_str(&text).map_err(|source| LevelError::ConfigFormat {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()
    }

    fn validate(self) -> Result<Self> {
        if !self.tick_seconds.is_finite() || self.tick_seconds <= 0.0 {
            return Err(invalid_parameter(
                "tick_seconds",
                &self.tick_seconds,
                &"must be a positive number of seconds",
            ));
        }
        if !self.physics.step_epsilon.is_finite() || self.physics.step_epsilon < 0.0 {
            return Err(invalid_parameter(
                "physics.step_epsilon",
                &self.physics.step_epsilon,
                &"must be a non-negative distance",
            ));
        }
        Ok(self)
    }
}
