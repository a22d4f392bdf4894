//! The running level: grid, characters and the per-tick update
//!
//! Characters live in a slot map keyed by [`EntityId`]. Every character is
//! resolved against the same grid within a tick; the grid only changes
//! between ticks through the editor operations.

use std::sync::Arc;

use slotmap::{SlotMap, new_key_type};

use crate::io::configuration::{CONTACT_DAMAGE, INVINCIBILITY_SECONDS, SimulationConfig};
use crate::io::level::{EntityLayout, LevelData};
use crate::physics::movement::MovementResolver;
use crate::physics::state::{Intent, VerticalState};
use crate::scene::entity::{Character, CharacterKind, Damageable, Hittable, Moving, Positioned};
use crate::scene::layers::{LayerStack, RenderLayer};
use crate::scene::locomotion::Locomotion;
use crate::spatial::grid::Grid;
use crate::spatial::tiles::{TileCatalog, TileProperty};

new_key_type! {
    /// Stable handle of a character in a scene
    pub struct EntityId;
}

/// View centre, optionally locked on the player
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Centre of the view in world units
    pub center: [f32; 2],
    /// Re-centre on the player every tick
    pub follow_player: bool,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            center: [0.0, 0.0],
            follow_player: true,
        }
    }
}

/// Level state owned by the game loop
#[derive(Debug, Clone)]
pub struct Scene {
    grid: Grid,
    characters: SlotMap<EntityId, Character>,
    player: EntityId,
    layers: LayerStack<EntityId>,
    camera: Camera,
    resolver: MovementResolver,
    locomotion: Locomotion,
    player_intent: Intent,
    ticks: u64,
}

impl Scene {
    /// Build a scene from loaded level data
    pub fn from_level(level: LevelData, config: &SimulationConfig) -> Self {
        let mut characters = SlotMap::with_key();
        let mut layers = LayerStack::default();

        let player = characters.insert(Character::new(
            CharacterKind::Player,
            level.entities.player,
        ));
        layers.add(RenderLayer::Player, player);

        for &position in &level.entities.enemies {
            let enemy = characters.insert(Character::new(CharacterKind::Enemy, position));
            layers.add(RenderLayer::Mobs, enemy);
        }

        log::debug!(
            "Scene built with {} enemies on a {}x{} grid",
            level.entities.enemies.len(),
            level.grid.width(),
            level.grid.height()
        );

        let mut scene = Self {
            grid: level.grid,
            characters,
            player,
            layers,
            camera: Camera::default(),
            resolver: MovementResolver::from_config(config),
            locomotion: config.locomotion,
            player_intent: Intent::default(),
            ticks: 0,
        };
        scene.follow_player();
        scene
    }

    /// Tile catalog of the level
    pub const fn catalog(&self) -> &Arc<TileCatalog> {
        self.grid.catalog()
    }

    /// The level grid
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access, for editing between ticks
    pub const fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Draw order of characters
    pub const fn layers(&self) -> &LayerStack<EntityId> {
        &self.layers
    }

    /// Camera state
    pub const fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable camera state
    pub const fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Ticks simulated so far
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Handle of the player
    pub const fn player_id(&self) -> EntityId {
        self.player
    }

    /// The player character
    pub fn player(&self) -> Option<&Character> {
        self.characters.get(self.player)
    }

    /// A character by handle
    pub fn character(&self, id: EntityId) -> Option<&Character> {
        self.characters.get(id)
    }

    /// A character by handle, mutably
    pub fn character_mut(&mut self, id: EntityId) -> Option<&mut Character> {
        self.characters.get_mut(id)
    }

    /// All enemies with their handles
    pub fn enemies(&self) -> impl Iterator<Item = (EntityId, &Character)> {
        self.characters
            .iter()
            .filter(|(_, character)| character.kind == CharacterKind::Enemy)
    }

    /// Number of characters, player included
    pub fn character_count(&self) -> usize {
        self.characters.len()
    }

    /// Add a character
    ///
    /// A scene has exactly one player: spawning a player moves the existing
    /// one and returns its handle.
    pub fn spawn(&mut self, kind: CharacterKind, position: [f32; 2]) -> EntityId {
        match kind {
            CharacterKind::Player => {
                if let Some(player) = self.characters.get_mut(self.player) {
                    player.set_position(position);
                }
                self.player
            }
            CharacterKind::Enemy => {
                let id = self
                    .characters
                    .insert(Character::new(CharacterKind::Enemy, position));
                self.layers.add(RenderLayer::Mobs, id);
                id
            }
        }
    }

    /// Remove a character; the player cannot be removed
    pub fn despawn(&mut self, id: EntityId) -> Option<Character> {
        if id == self.player {
            log::warn!("Ignoring request to despawn the player");
            return None;
        }
        let character = self.characters.remove(id)?;
        self.layers.remove(RenderLayer::Mobs, &id);
        Some(character)
    }

    /// Set what the player wants to do from the next tick on
    pub const fn set_player_intent(&mut self, intent: Intent) {
        self.player_intent = intent;
    }

    /// Move every character and the camera
    pub fn translate_all(&mut self, dx: f32, dy: f32) {
        for character in self.characters.values_mut() {
            character.translate(dx, dy);
        }
        self.camera.center = [self.camera.center[0] + dx, self.camera.center[1] + dy];
    }

    /// Current character positions in level-file form
    pub fn entity_layout(&self) -> EntityLayout {
        EntityLayout {
            player: self.player().map_or([0.0, 0.0], Positioned::position),
            enemies: self
                .enemies()
                .map(|(_, enemy)| enemy.position())
                .collect(),
        }
    }

    /// Advance the simulation by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        if !dt.is_finite() || dt < 0.0 {
            log::warn!("Skipping tick with invalid duration {dt}");
            return;
        }

        self.apply_contact_damage();

        for character in self.characters.values_mut() {
            character.vitals.update(dt);
        }

        self.apply_player_intent();

        let intent = self.player_intent;
        for (id, character) in &mut self.characters {
            let walking = match character.kind {
                CharacterKind::Player => intent.walk.is_some(),
                CharacterKind::Enemy => true,
            };
            let displacement = self
                .locomotion
                .requested_displacement(character, walking, dt);

            match self.resolver.resolve(&self.grid, character, displacement) {
                Ok(resolution) => {
                    if resolution.horizontal_collision && character.kind == CharacterKind::Enemy {
                        character.facing = character.facing.toggled();
                    }
                }
                Err(error) => {
                    log::warn!("Character {id:?} not moved this tick: {error}");
                }
            }
        }

        if self.camera.follow_player {
            self.follow_player();
        }
        self.ticks += 1;
    }

    fn apply_contact_damage(&mut self) {
        let Some(player) = self.characters.get(self.player) else {
            return;
        };
        if player.vitals.is_invincible() || !player.is_alive() {
            return;
        }

        let player_box = player.hitbox();
        let hit = self
            .enemies()
            .any(|(_, enemy)| enemy.hitbox().overlaps(&player_box));

        if hit && let Some(target) = self.characters.get_mut(self.player) {
            target.take_damage(CONTACT_DAMAGE);
            target.vitals.set_invincible(true, INVINCIBILITY_SECONDS);
            log::debug!("Player hit, {} hp left", target.hp());
        }
    }

    fn apply_player_intent(&mut self) {
        let intent = self.player_intent;
        let Some(player) = self.characters.get_mut(self.player) else {
            return;
        };

        if let Some(facing) = intent.walk {
            player.facing = facing;
        }

        let touching_ladder = self
            .resolver
            .touches(&self.grid, &player.hitbox(), TileProperty::Ladder);
        let previous = player.vertical_state();
        let next = previous
            .apply_intent(&intent, touching_ladder)
            .after_ladder_check(touching_ladder);

        if next == VerticalState::Jumping && previous != VerticalState::Jumping {
            player.jump_elapsed = 0.0;
        }
        player.set_vertical_state(next);
    }

    fn follow_player(&mut self) {
        if let Some(player) = self.characters.get(self.player) {
            self.camera.center = player.hitbox().center();
        }
    }
}
