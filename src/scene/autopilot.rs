//! Seeded random intents for headless runs
//!
//! The autopilot keeps a walking direction for a random number of ticks and
//! now and then asks for a jump or a climb. The same seed always produces the
//! same intent sequence.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::physics::state::{Facing, Intent};

/// Probability of a jump request on any tick
const JUMP_CHANCE: f64 = 0.02;
/// Probability of starting to climb when a new walk segment begins
const CLIMB_CHANCE: f64 = 0.25;
/// Shortest walk segment in ticks
const MIN_SEGMENT_TICKS: u32 = 15;
/// Longest walk segment in ticks
const MAX_SEGMENT_TICKS: u32 = 120;

/// Deterministic random intent source
#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: StdRng,
    current: Intent,
    remaining_ticks: u32,
}

impl Autopilot {
    /// Create an autopilot from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            current: Intent::default(),
            remaining_ticks: 0,
        }
    }

    fn start_segment(&mut self) {
        self.remaining_ticks = self.rng.random_range(MIN_SEGMENT_TICKS..=MAX_SEGMENT_TICKS);

        let walk = match self.rng.random_range(0..3) {
            0 => None,
            1 => Some(Facing::Left),
            _ => Some(Facing::Right),
        };
        let climbing = self.rng.random_bool(CLIMB_CHANCE);
        let climb_up = climbing && self.rng.random_bool(0.5);

        self.current = Intent {
            walk,
            jump: false,
            climb_up,
            climb_down: climbing && !climb_up,
        };
    }

    /// Intent for the next tick
    pub fn next_intent(&mut self) -> Intent {
        if self.remaining_ticks == 0 {
            self.start_segment();
        }
        self.remaining_ticks = self.remaining_ticks.saturating_sub(1);

        Intent {
            jump: self.rng.random_bool(JUMP_CHANCE),
            ..self.current
        }
    }
}
