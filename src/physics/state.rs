//! Per-entity vertical state machine
//!
//! Transitions come from two sources only: the entity's intent (jump, climb
//! keys) and the movement resolver's collision outcome.

/// Vertical direction while on a ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClimbDirection {
    /// Held in place
    #[default]
    None,
    /// Moving up the ladder
    Up,
    /// Moving down the ladder
    Down,
}

/// Vertical state of a moving entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerticalState {
    /// Standing on a solid tile
    Grounded,
    /// Moving down freely
    #[default]
    Falling,
    /// Rising after a jump request
    Jumping,
    /// On a ladder
    Climbing(ClimbDirection),
}

/// Horizontal facing of a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Facing {
    /// Toward negative x
    Left,
    /// Toward positive x
    #[default]
    Right,
}

impl Facing {
    /// `-1.0` for left, `1.0` for right
    pub const fn sign(self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }

    /// The opposite direction
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// What a character wants to do this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Intent {
    /// Walk direction, `None` to stand still
    pub walk: Option<Facing>,
    /// Jump requested
    pub jump: bool,
    /// Climb key up held
    pub climb_up: bool,
    /// Climb key down held
    pub climb_down: bool,
}

impl VerticalState {
    /// True in any climbing state
    pub const fn is_climbing(self) -> bool {
        matches!(self, Self::Climbing(_))
    }

    /// Climb direction, `None` when not climbing
    pub const fn climb_direction(self) -> ClimbDirection {
        match self {
            Self::Climbing(direction) => direction,
            _ => ClimbDirection::None,
        }
    }

    /// Apply input-driven transitions
    ///
    /// A jump request is refused while climbing and overrides the climb keys,
    /// so a climber keeps its direction. Climb keys only take effect on a
    /// ladder; releasing both keys on a ladder holds a climber in place.
    #[must_use]
    pub const fn apply_intent(self, intent: &Intent, touching_ladder: bool) -> Self {
        if intent.jump {
            return if self.is_climbing() {
                self
            } else {
                Self::Jumping
            };
        }
        if touching_ladder {
            if intent.climb_up {
                return Self::Climbing(ClimbDirection::Up);
            }
            if intent.climb_down {
                return Self::Climbing(ClimbDirection::Down);
            }
            if self.is_climbing() {
                return Self::Climbing(ClimbDirection::None);
            }
        }
        self
    }

    /// Climbers that lost the ladder start falling
    #[must_use]
    pub const fn after_ladder_check(self, touching_ladder: bool) -> Self {
        if self.is_climbing() && !touching_ladder {
            Self::Falling
        } else {
            self
        }
    }

    /// State after vertical motion `dy` was blocked by a solid tile
    ///
    /// Landing grounds from any state; a head bump ends a jump.
    #[must_use]
    pub const fn after_vertical_block(self, dy: f32) -> Self {
        if dy > 0.0 {
            Self::Grounded
        } else if matches!(self, Self::Jumping) {
            Self::Falling
        } else {
            self
        }
    }

    /// Walking off a ledge turns a grounded entity into a falling one
    #[must_use]
    pub const fn after_ground_probe(self, solid_below: bool) -> Self {
        if matches!(self, Self::Grounded) && !solid_below {
            Self::Falling
        } else {
            self
        }
    }
}
