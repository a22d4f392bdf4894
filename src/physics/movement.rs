//! Axis-separated movement resolution against the tile grid
//!
//! Each tick a requested displacement is clamped below one tile per axis,
//! then resolved on Y and afterwards on X, each against Solid tiles. Blocked
//! motion snaps the hitbox to the tile boundary and feeds the vertical state
//! machine.

use crate::io::configuration::{DEFAULT_VIRTUAL_GROUND_ROW, PhysicsConfig, SimulationConfig};
use crate::io::error::{LevelError, Result};
use crate::physics::collision::touching;
use crate::physics::state::VerticalState;
use crate::scene::entity::Moving;
use crate::spatial::bounds::BoundingBox;
use crate::spatial::grid::Grid;
use crate::spatial::tiles::TileProperty;

/// Result of moving one entity for one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    /// Hitbox after both axes were resolved
    pub hitbox: BoundingBox,
    /// Vertical state after resolution
    pub state: VerticalState,
    /// X motion was blocked by a solid tile
    pub horizontal_collision: bool,
}

impl Resolution {
    /// Top-left corner of the resolved hitbox
    pub const fn position(&self) -> [f32; 2] {
        [self.hitbox.x, self.hitbox.y]
    }
}

/// Moves hitboxes through a grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementResolver {
    physics: PhysicsConfig,
    virtual_ground_row: i32,
}

impl Default for MovementResolver {
    fn default() -> Self {
        Self::new(PhysicsConfig::default(), DEFAULT_VIRTUAL_GROUND_ROW)
    }
}

// Limit |step| to `max_step`, keeping the sign
const fn clamp_step(step: f32, max_step: f32) -> f32 {
    step.clamp(-max_step, max_step)
}

impl MovementResolver {
    /// Create a resolver
    pub const fn new(physics: PhysicsConfig, virtual_ground_row: i32) -> Self {
        Self {
            physics,
            virtual_ground_row,
        }
    }

    /// Create a resolver from a simulation config
    pub const fn from_config(config: &SimulationConfig) -> Self {
        Self::new(config.physics, config.virtual_ground_row)
    }

    /// Row index acting as the invisible floor
    pub const fn virtual_ground_row(&self) -> i32 {
        self.virtual_ground_row
    }

    /// Check a box against a property with this resolver's virtual ground
    pub fn touches(&self, grid: &Grid, bbox: &BoundingBox, property: TileProperty) -> bool {
        touching(grid, bbox, property, self.virtual_ground_row)
    }

    /// Largest displacement allowed on one axis in one tick
    pub const fn max_step(&self, tile_size: f32) -> f32 {
        (tile_size - self.physics.step_epsilon).max(0.0)
    }

    /// Resolve a displacement for a bare hitbox
    ///
    /// # Errors
    ///
    /// Returns [`LevelError::InvalidDisplacement`] if either component is not
    /// finite, or [`LevelError::InvalidHitbox`] if the hitbox is degenerate
    pub fn resolve_box(
        &self,
        grid: &Grid,
        hitbox: BoundingBox,
        state: VerticalState,
        displacement: [f32; 2],
    ) -> Result<Resolution> {
        let [dx, dy] = displacement;
        if !dx.is_finite() || !dy.is_finite() {
            return Err(LevelError::InvalidDisplacement { dx, dy });
        }
        if !hitbox.is_valid() {
            return Err(LevelError::InvalidHitbox {
                x: hitbox.x,
                y: hitbox.y,
                w: hitbox.w,
                h: hitbox.h,
            });
        }

        let tile_size = grid.tile_size();
        let max_step = self.max_step(tile_size);
        let mut hitbox = hitbox;
        let mut state = state;
        let mut horizontal_collision = false;

        // Y first
        if dy != 0.0 {
            let dy = clamp_step(dy, max_step);
            let probe = hitbox.offset(0.0, dy);
            if self.touches(grid, &probe, TileProperty::Solid) {
                if dy > 0.0 {
                    hitbox.y = ((hitbox.bottom() - 1.0) / tile_size).ceil() * tile_size - hitbox.h;
                }
                state = state.after_vertical_block(dy);
            } else {
                hitbox = probe;
            }
        }

        if dx != 0.0 {
            let dx = clamp_step(dx, max_step);
            let probe = hitbox.offset(dx, 0.0);
            if self.touches(grid, &probe, TileProperty::Solid) {
                hitbox.x = if dx > 0.0 {
                    ((hitbox.right() - 1.0) / tile_size).ceil() * tile_size - hitbox.w
                } else {
                    (hitbox.x / tile_size).floor() * tile_size
                };
                horizontal_collision = true;
            } else {
                hitbox = probe;
            }

            let ground_probe = hitbox.offset(0.0, self.physics.ground_probe_distance);
            let solid_below = self.touches(grid, &ground_probe, TileProperty::Solid);
            state = state.after_ground_probe(solid_below);
        }

        Ok(Resolution {
            hitbox,
            state,
            horizontal_collision,
        })
    }

    /// Move an entity by `displacement` and write the result back
    ///
    /// On error the entity is left untouched.
    ///
    /// # Errors
    ///
    /// Same as [`MovementResolver::resolve_box`]
    pub fn resolve<E: Moving + ?Sized>(
        &self,
        grid: &Grid,
        entity: &mut E,
        displacement: [f32; 2],
    ) -> Result<Resolution> {
        let resolution =
            self.resolve_box(grid, entity.hitbox(), entity.vertical_state(), displacement)?;
        entity.set_vertical_state(resolution.state);
        entity.place_hitbox(&resolution.hitbox);
        Ok(resolution)
    }
}
