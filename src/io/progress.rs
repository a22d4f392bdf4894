//! Per-level tick progress with automatic batching for large level sets

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

/// Display name, current tick and total ticks of one level
#[derive(Debug, Clone, Default)]
struct LevelState {
    name: String,
    tick: usize,
    ticks: usize,
}

/// Coordinates progress display for batch runs
///
/// Small batches get one bar per level; larger ones add a batch bar and show
/// a rolling window of the most recent levels.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    level_bars: Vec<ProgressBar>,
    level_states: Vec<LevelState>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static TICK_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Levels: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create an empty progress display
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            level_bars: Vec::new(),
            level_states: Vec::new(),
        }
    }

    /// Create bars for `level_count` levels
    pub fn initialize(&mut self, level_count: usize) {
        if level_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(level_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..level_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let bar = ProgressBar::new(0);
            bar.set_style(TICK_STYLE.clone());
            self.level_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Number of bars showing individual levels
    pub fn visible_bar_count(&self) -> usize {
        self.level_bars.len()
    }

    /// Whether a batch bar was created
    pub const fn is_batched(&self) -> bool {
        self.batch_bar.is_some()
    }

    /// Start tracking a level
    pub fn start_level(&mut self, index: usize, path: &Path, ticks: usize) {
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if index >= self.level_states.len() {
            self.level_states.resize(index + 1, LevelState::default());
        }
        if let Some(state) = self.level_states.get_mut(index) {
            *state = LevelState {
                name,
                tick: 0,
                ticks,
            };
        }
        self.update_bars();
    }

    /// Report the tick a level has reached
    pub fn update_tick(&mut self, index: usize, tick: usize) {
        if let Some(state) = self.level_states.get_mut(index) {
            state.tick = tick;
        }
        self.update_bars();
    }

    /// Mark a level as done
    pub fn complete_level(&mut self, index: usize) {
        if let Some(batch_bar) = &self.batch_bar {
            batch_bar.inc(1);
        }
        if let Some(state) = self.level_states.get_mut(index) {
            state.name = format!("✓ {}", state.name);
            state.tick = state.ticks;
        }
        self.update_bars();
    }

    /// Clear all progress displays
    pub fn finish(&self) {
        if let Some(batch_bar) = &self.batch_bar {
            batch_bar.finish_with_message("All levels simulated");
        }
        if let Err(error) = self.multi_progress.clear() {
            log::debug!("Could not clear progress bars: {error}");
        }
    }

    // Show the most recent levels on the available bars
    fn update_bars(&self) {
        let active: Vec<&LevelState> = self
            .level_states
            .iter()
            .filter(|state| !state.name.is_empty())
            .collect();

        let start = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start..).unwrap_or(&[]);

        for (bar_index, bar) in self.level_bars.iter().enumerate() {
            if let Some(state) = visible.get(bar_index) {
                bar.set_length(state.ticks as u64);
                bar.set_position(state.tick as u64);
                let width = state.ticks.to_string().len();
                bar.set_message(format!("{:>width$}/{}", state.tick, state.ticks));
                bar.set_prefix(state.name.clone());
            } else {
                bar.set_length(0);
                bar.set_position(0);
                bar.set_message(String::new());
                bar.set_prefix(String::new());
            }
        }
    }
}
