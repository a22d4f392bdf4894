//! Tests for teleporting the player and managing enemies under the cursor

#[cfg(test)]
mod tests {

    use ledgewalk::editor::entities::{remove_enemy_at, spawn_enemy_at, teleport_player};
    use ledgewalk::io::configuration::SimulationConfig;
    use ledgewalk::io::level::{EntityLayout, LevelData};
    use ledgewalk::scene::entity::Positioned;
    use ledgewalk::scene::world::Scene;

    use crate::grid;

    const HOVER: [f32; 2] = [40.0, 40.0];

    fn scene() -> Scene {
        let level = LevelData {
            grid: grid(". . .\n# # #"),
            entities: EntityLayout::default(),
        };
        Scene::from_level(level, &SimulationConfig::default())
    }

    // Tests that teleporting centres the player's hover box on the cursor
    #[test]
    fn test_teleport_player_centres_on_cursor() {
        let mut scene = scene();

        teleport_player(&mut scene, [100.0, 100.0], HOVER);

        assert_eq!(scene.player().unwrap().position(), [80.0, 80.0]);
    }

    // Tests spawning an enemy and removing it again by clicking on it
    // Verified by matching enemies on their position instead of their hitbox
    #[test]
    fn test_spawn_and_remove_enemy() {
        let mut scene = scene();

        let spawned = spawn_enemy_at(&mut scene, [100.0, 100.0], HOVER);
        assert_eq!(scene.character(spawned).unwrap().position(), [80.0, 80.0]);
        assert_eq!(scene.enemies().count(), 1);

        assert_eq!(remove_enemy_at(&mut scene, [110.0, 115.0]), Some(spawned));
        assert_eq!(scene.enemies().count(), 0);
        assert_eq!(remove_enemy_at(&mut scene, [110.0, 115.0]), None);
    }

    // Tests that removal never targets the player
    #[test]
    fn test_remove_ignores_player() {
        let mut scene = scene();
        teleport_player(&mut scene, [20.0, 20.0], HOVER);

        assert_eq!(remove_enemy_at(&mut scene, [20.0, 20.0]), None);
        assert_eq!(scene.character_count(), 1);
    }
}
