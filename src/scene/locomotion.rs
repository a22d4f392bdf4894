//! Turning a character's state and intent into a requested displacement

use serde::{Deserialize, Serialize};

use crate::io::configuration::{
    DEFAULT_CLIMB_SPEED, DEFAULT_FALL_SPEED, DEFAULT_JUMP_DURATION, DEFAULT_JUMP_SPEED,
    DEFAULT_WALK_SPEED,
};
use crate::physics::state::{ClimbDirection, VerticalState};
use crate::scene::entity::{Character, Moving};

/// Character speeds in world units per second
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Locomotion {
    /// Horizontal walking speed
    pub walk_speed: f32,
    /// Falling speed
    pub fall_speed: f32,
    /// Rising speed during a jump
    pub jump_speed: f32,
    /// Seconds a jump rises before it turns into a fall
    pub jump_duration: f32,
    /// Ladder speed
    pub climb_speed: f32,
}

impl Default for Locomotion {
    fn default() -> Self {
        Self {
            walk_speed: DEFAULT_WALK_SPEED,
            fall_speed: DEFAULT_FALL_SPEED,
            jump_speed: DEFAULT_JUMP_SPEED,
            jump_duration: DEFAULT_JUMP_DURATION,
            climb_speed: DEFAULT_CLIMB_SPEED,
        }
    }
}

impl Locomotion {
    /// Vertical displacement for a state over `dt` seconds
    pub const fn vertical_displacement(&self, state: VerticalState, dt: f32) -> f32 {
        match state {
            VerticalState::Grounded | VerticalState::Climbing(ClimbDirection::None) => 0.0,
            VerticalState::Falling => self.fall_speed * dt,
            VerticalState::Jumping => -self.jump_speed * dt,
            VerticalState::Climbing(ClimbDirection::Up) => -self.climb_speed * dt,
            VerticalState::Climbing(ClimbDirection::Down) => self.climb_speed * dt,
        }
    }

    /// Requested displacement of a character for this tick
    ///
    /// Advances the jump timer; a jump that has risen for `jump_duration`
    /// becomes a fall before the displacement is computed.
    pub fn requested_displacement(
        &self,
        character: &mut Character,
        walking: bool,
        dt: f32,
    ) -> [f32; 2] {
        if character.vertical_state() == VerticalState::Jumping {
            character.jump_elapsed += dt;
            if character.jump_elapsed >= self.jump_duration {
                character.set_vertical_state(VerticalState::Falling);
            }
        }

        let dx = if walking {
            character.facing.sign() * self.walk_speed * dt
        } else {
            0.0
        };
        let dy = self.vertical_displacement(character.vertical_state(), dt);
        [dx, dy]
    }
}
