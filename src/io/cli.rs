//! Command-line interface for headless level runs

use crate::io::catalog::load_catalog_from_path;
use crate::io::configuration::{
    CATALOG_FILE_NAME, DEFAULT_SEED, DEFAULT_TICKS, PREVIEW_FILE_NAME, SimulationConfig,
};
use crate::io::error::{Result, file_system, invalid_parameter};
use crate::io::image::{export_preview_png, load_atlas};
use crate::io::level::{is_level_dir, load_level_dir};
use crate::io::progress::ProgressManager;
use crate::scene::autopilot::Autopilot;
use crate::scene::entity::{Damageable, Moving, Positioned};
use crate::scene::world::Scene;
use crate::spatial::tiles::TileCatalog;
use clap::Parser;
use image::RgbaImage;
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "ledgewalk")]
#[command(
    author,
    version,
    about = "Simulate platformer levels headlessly and export previews"
)]
/// Command-line arguments for the level runner
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Level directory, or a directory of level directories
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Tile catalog file (defaults to tiles.json inside TARGET)
    #[arg(short, long)]
    pub tiles: Option<PathBuf>,

    /// Simulation settings as TOML
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Ticks to simulate per level
    #[arg(short = 'n', long, default_value_t = DEFAULT_TICKS)]
    pub ticks: usize,

    /// Random seed for the autopilot
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Tile atlas PNG; enables preview export
    #[arg(short, long)]
    pub atlas: Option<PathBuf>,

    /// Run levels even if their preview exists
    #[arg(long)]
    pub no_skip: bool,

    /// Suppress progress output and info logs
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug logs
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,
}

impl Cli {
    /// Check if levels with an existing preview should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Catalog file to load
    pub fn catalog_path(&self) -> PathBuf {
        self.tiles
            .clone()
            .unwrap_or_else(|| self.target.join(CATALOG_FILE_NAME))
    }
}

/// Final state of one simulated level
#[derive(Debug, Clone, PartialEq)]
pub struct LevelSummary {
    /// Level directory
    pub path: PathBuf,
    /// Grid size after the run
    pub grid_size: [usize; 2],
    /// Player position after the run
    pub player_position: [f32; 2],
    /// Player hit points after the run
    pub player_hp: u32,
    /// Enemies in the scene
    pub enemy_count: usize,
}

/// Runs every level of the target with progress tracking
pub struct LevelProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl LevelProcessor {
    /// Create a processor for the given arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Simulate all selected levels
    ///
    /// # Errors
    ///
    /// Returns an error if the target, catalog, config or atlas is invalid, or
    /// a level fails to load or export
    pub fn process(&mut self) -> Result<Vec<LevelSummary>> {
        let levels = self.collect_levels()?;
        if levels.is_empty() {
            log::warn!("No levels to run under {}", self.cli.target.display());
            return Ok(Vec::new());
        }

        let catalog = Arc::new(load_catalog_from_path(&self.cli.catalog_path())?);
        let config = match &self.cli.config {
            Some(path) => SimulationConfig::from_toml_path(path)?,
            None => SimulationConfig::default(),
        };
        let atlas = self.cli.atlas.as_deref().map(load_atlas).transpose()?;

        if let Some(pm) = &mut self.progress_manager {
            pm.initialize(levels.len());
        }

        let mut summaries = Vec::with_capacity(levels.len());
        for (index, level) in levels.iter().enumerate() {
            let summary = self.process_level(level, index, &catalog, &config, atlas.as_ref())?;
            summaries.push(summary);
        }

        if let Some(pm) = &self.progress_manager {
            pm.finish();
        }

        Ok(summaries)
    }

    fn collect_levels(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if is_level_dir(target) {
            return Ok(if self.should_process_level(target) {
                vec![target.clone()]
            } else {
                Vec::new()
            });
        }

        if !target.is_dir() {
            return Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be a level directory or a directory of levels",
            ));
        }

        let mut levels = Vec::new();
        let entries = std::fs::read_dir(target).map_err(|e| file_system(target, "list levels", e))?;
        for entry in entries {
            let path = entry
                .map_err(|e| file_system(target, "list levels", e))?
                .path();
            if is_level_dir(&path) && self.should_process_level(&path) {
                levels.push(path);
            }
        }
        levels.sort();
        Ok(levels)
    }

    fn should_process_level(&self, level: &Path) -> bool {
        if self.cli.atlas.is_none() || !self.cli.skip_existing() {
            return true;
        }

        let preview = level.join(PREVIEW_FILE_NAME);
        if preview.exists() {
            log::info!("Skipping: {} (preview exists)", level.display());
            false
        } else {
            true
        }
    }

    fn process_level(
        &mut self,
        level: &Path,
        index: usize,
        catalog: &Arc<TileCatalog>,
        config: &SimulationConfig,
        atlas: Option<&RgbaImage>,
    ) -> Result<LevelSummary> {
        if let Some(pm) = &mut self.progress_manager {
            pm.start_level(index, level, self.cli.ticks);
        }

        let data = load_level_dir(level, Arc::clone(catalog))?;
        let mut scene = Scene::from_level(data, config);
        let mut autopilot = Autopilot::new(self.cli.seed);

        for tick in 1..=self.cli.ticks {
            scene.set_player_intent(autopilot.next_intent());
            scene.tick(config.tick_seconds);

            if let Some(pm) = &mut self.progress_manager {
                pm.update_tick(index, tick);
            }
        }

        let summary = LevelSummary {
            path: level.to_path_buf(),
            grid_size: scene.grid().dimensions(),
            player_position: scene.player().map_or([0.0, 0.0], Positioned::position),
            player_hp: scene.player().map_or(0, Damageable::hp),
            enemy_count: scene.enemies().count(),
        };

        log::info!(
            "{}: grid {}x{}, player at ({:.1}, {:.1}) {:?} with {} hp, {} enemies",
            level.display(),
            summary.grid_size[0],
            summary.grid_size[1],
            summary.player_position[0],
            summary.player_position[1],
            scene.player().map(Moving::vertical_state),
            summary.player_hp,
            summary.enemy_count
        );

        if let Some(atlas) = atlas {
            export_preview_png(scene.grid_mut(), atlas, &level.join(PREVIEW_FILE_NAME))?;
        }

        if let Some(pm) = &mut self.progress_manager {
            pm.complete_level(index);
        }

        Ok(summary)
    }
}
