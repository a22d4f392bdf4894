//! Editor operations on characters

use crate::scene::entity::{CharacterKind, Hittable, Positioned};
use crate::scene::world::{EntityId, Scene};

// Top-left corner that centres a `size` box on `position`
const fn centred(position: [f32; 2], size: [f32; 2]) -> [f32; 2] {
    [position[0] - size[0] / 2.0, position[1] - size[1] / 2.0]
}

/// Move the player so the hover box of `hover_size` is centred on the cursor
pub fn teleport_player(scene: &mut Scene, position: [f32; 2], hover_size: [f32; 2]) {
    let id = scene.player_id();
    if let Some(player) = scene.character_mut(id) {
        player.set_position(centred(position, hover_size));
    }
}

/// Spawn an enemy centred on the cursor
pub fn spawn_enemy_at(scene: &mut Scene, position: [f32; 2], hover_size: [f32; 2]) -> EntityId {
    scene.spawn(CharacterKind::Enemy, centred(position, hover_size))
}

/// Remove the first enemy whose hitbox contains the cursor
pub fn remove_enemy_at(scene: &mut Scene, position: [f32; 2]) -> Option<EntityId> {
    let Some(id) = scene
        .enemies()
        .find(|(_, enemy)| enemy.hitbox().contains(position))
        .map(|(id, _)| id)
    else {
        log::debug!(
            "No enemy under ({}, {}) to remove",
            position[0],
            position[1]
        );
        return None;
    };

    scene.despawn(id).map(|_| id)
}
