//! Characters and the capability traits the simulation works through
//!
//! Each capability is a small trait; [`Character`] implements all of them and
//! a [`CharacterKind`] tag distinguishes the player from enemies.

use crate::io::configuration::{ENEMY_HITBOX_SIZE, MAX_HP, PLAYER_HITBOX_SIZE};
use crate::physics::state::{Facing, VerticalState};
use crate::spatial::bounds::BoundingBox;

/// Something with a world position
pub trait Positioned {
    /// Top-left corner in world units
    fn position(&self) -> [f32; 2];

    /// Move to an absolute position
    fn set_position(&mut self, position: [f32; 2]);

    /// Move by a relative offset
    fn translate(&mut self, dx: f32, dy: f32) {
        let [x, y] = self.position();
        self.set_position([x + dx, y + dy]);
    }
}

/// Something with a collision box
pub trait Hittable: Positioned {
    /// Offset of the hitbox from the position
    fn hitbox_offset(&self) -> [f32; 2];

    /// Size of the hitbox
    fn hitbox_size(&self) -> [f32; 2];

    /// Hitbox in world units
    fn hitbox(&self) -> BoundingBox {
        let [x, y] = self.position();
        let [ox, oy] = self.hitbox_offset();
        let [w, h] = self.hitbox_size();
        BoundingBox::new(x + ox, y + oy, w, h)
    }
}

/// Something the movement resolver can move
pub trait Moving: Hittable {
    /// Current vertical state
    fn vertical_state(&self) -> VerticalState;

    /// Replace the vertical state
    fn set_vertical_state(&mut self, state: VerticalState);

    /// Move so the hitbox's corner lands on `hitbox`'s corner
    fn place_hitbox(&mut self, hitbox: &BoundingBox) {
        let [ox, oy] = self.hitbox_offset();
        self.set_position([hitbox.x - ox, hitbox.y - oy]);
    }
}

/// Hit points with a post-damage invincibility window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vitals {
    hp: u32,
    max_hp: u32,
    invincible: bool,
    invincibility_elapsed: f32,
    invincibility_duration: f32,
}

impl Default for Vitals {
    fn default() -> Self {
        Self::new(MAX_HP)
    }
}

impl Vitals {
    /// Full health, not invincible
    pub const fn new(max_hp: u32) -> Self {
        Self {
            hp: max_hp,
            max_hp,
            invincible: false,
            invincibility_elapsed: 0.0,
            invincibility_duration: 0.0,
        }
    }

    /// Current hit points
    pub const fn hp(&self) -> u32 {
        self.hp
    }

    /// Hit point ceiling
    pub const fn max_hp(&self) -> u32 {
        self.max_hp
    }

    /// Set hit points, clamped to the maximum
    pub fn set_hp(&mut self, hp: u32) {
        self.hp = hp.min(self.max_hp);
    }

    /// Subtract hit points, saturating at zero; ignored while invincible
    pub const fn take_damage(&mut self, amount: u32) {
        if !self.invincible {
            self.hp = self.hp.saturating_sub(amount);
        }
    }

    /// Whether damage is currently ignored
    pub const fn is_invincible(&self) -> bool {
        self.invincible
    }

    /// Toggle invincibility; enabling it starts a window of `duration` seconds
    ///
    /// Does nothing when the state would not change or the character is dead.
    pub const fn set_invincible(&mut self, invincible: bool, duration: f32) {
        if self.invincible == invincible || !self.is_alive() {
            return;
        }
        self.invincible = invincible;
        if invincible {
            self.invincibility_duration = duration;
            self.invincibility_elapsed = 0.0;
        }
    }

    /// True while hit points remain
    pub const fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Advance the invincibility timer
    pub fn update(&mut self, dt: f32) {
        if self.invincible {
            self.invincibility_elapsed += dt;
            if self.invincibility_elapsed >= self.invincibility_duration {
                self.invincible = false;
                log::debug!("Invincibility ended");
            }
        }
    }
}

/// Something with hit points
pub trait Damageable {
    /// Health state
    fn vitals(&self) -> &Vitals;

    /// Mutable health state
    fn vitals_mut(&mut self) -> &mut Vitals;

    /// Current hit points
    fn hp(&self) -> u32 {
        self.vitals().hp()
    }

    /// Apply damage unless invincible
    fn take_damage(&mut self, amount: u32) {
        self.vitals_mut().take_damage(amount);
    }

    /// True while hit points remain
    fn is_alive(&self) -> bool {
        self.vitals().is_alive()
    }
}

/// Position, collision box and vertical state of a character
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Body {
    /// Top-left corner in world units
    pub position: [f32; 2],
    /// Hitbox offset from the position
    pub hitbox_offset: [f32; 2],
    /// Hitbox size
    pub hitbox_size: [f32; 2],
    /// Vertical state
    pub vertical_state: VerticalState,
}

/// Which role a character plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterKind {
    /// The controlled character
    Player,
    /// A walker that turns around at walls
    Enemy,
}

/// A player or enemy
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    /// Role
    pub kind: CharacterKind,
    /// Physical state
    pub body: Body,
    /// Health state
    pub vitals: Vitals,
    /// Walking direction
    pub facing: Facing,
    /// Seconds spent in the current jump
    pub jump_elapsed: f32,
}

impl Character {
    /// A character of the given kind with its default hitbox, falling
    pub const fn new(kind: CharacterKind, position: [f32; 2]) -> Self {
        let hitbox_size = match kind {
            CharacterKind::Player => PLAYER_HITBOX_SIZE,
            CharacterKind::Enemy => ENEMY_HITBOX_SIZE,
        };
        Self {
            kind,
            body: Body {
                position,
                hitbox_offset: [0.0, 0.0],
                hitbox_size,
                vertical_state: VerticalState::Falling,
            },
            vitals: Vitals::new(MAX_HP),
            facing: Facing::Right,
            jump_elapsed: 0.0,
        }
    }

    /// True for the player
    pub const fn is_player(&self) -> bool {
        matches!(self.kind, CharacterKind::Player)
    }
}

impl Positioned for Character {
    fn position(&self) -> [f32; 2] {
        self.body.position
    }

    fn set_position(&mut self, position: [f32; 2]) {
        self.body.position = position;
    }
}

impl Hittable for Character {
    fn hitbox_offset(&self) -> [f32; 2] {
        self.body.hitbox_offset
    }

    fn hitbox_size(&self) -> [f32; 2] {
        self.body.hitbox_size
    }
}

impl Moving for Character {
    fn vertical_state(&self) -> VerticalState {
        self.body.vertical_state
    }

    fn set_vertical_state(&mut self, state: VerticalState) {
        self.body.vertical_state = state;
    }
}

impl Damageable for Character {
    fn vitals(&self) -> &Vitals {
        &self.vitals
    }

    fn vitals_mut(&mut self) -> &mut Vitals {
        &mut self.vitals
    }
}
