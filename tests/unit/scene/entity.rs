//! Tests for hit points, invincibility and the capability traits

#[cfg(test)]
mod tests {

    use ledgewalk::io::configuration::MAX_HP;
    use ledgewalk::physics::state::VerticalState;
    use ledgewalk::scene::entity::{
        Character, CharacterKind, Damageable, Hittable, Moving, Positioned, Vitals,
    };
    use ledgewalk::spatial::bounds::BoundingBox;

    // Tests that damage saturates at zero and kills
    #[test]
    fn test_take_damage_saturates() {
        let mut vitals = Vitals::new(30);

        vitals.take_damage(20);
        assert_eq!(vitals.hp(), 10);
        assert!(vitals.is_alive());

        vitals.take_damage(50);
        assert_eq!(vitals.hp(), 0);
        assert!(!vitals.is_alive());
    }

    // Tests that invincibility blocks damage until its window elapses
    // Verified by never clearing the invincible flag in update
    #[test]
    fn test_invincibility_window() {
        let mut vitals = Vitals::default();
        assert_eq!(vitals.max_hp(), MAX_HP);

        vitals.set_invincible(true, 1.0);
        vitals.take_damage(40);
        assert_eq!(vitals.hp(), MAX_HP);

        vitals.update(0.5);
        assert!(vitals.is_invincible());
        vitals.update(0.5);
        assert!(!vitals.is_invincible());

        vitals.take_damage(40);
        assert_eq!(vitals.hp(), MAX_HP - 40);
    }

    // Tests that a repeated enable does not restart the window
    #[test]
    fn test_set_invincible_ignores_unchanged_state() {
        let mut vitals = Vitals::default();

        vitals.set_invincible(true, 1.0);
        vitals.update(0.75);
        vitals.set_invincible(true, 1.0);
        vitals.update(0.25);

        assert!(!vitals.is_invincible());
    }

    // Tests that the dead cannot become invincible
    #[test]
    fn test_dead_cannot_become_invincible() {
        let mut vitals = Vitals::new(10);
        vitals.take_damage(10);

        vitals.set_invincible(true, 1.0);

        assert!(!vitals.is_invincible());
    }

    // Tests that hit points are clamped to the maximum
    #[test]
    fn test_set_hp_clamps() {
        let mut vitals = Vitals::new(50);

        vitals.set_hp(80);
        assert_eq!(vitals.hp(), 50);

        vitals.set_hp(7);
        assert_eq!(vitals.hp(), 7);
    }

    // Tests the hitbox derived from position and offset
    #[test]
    fn test_character_hitbox_follows_offset() {
        let mut enemy = Character::new(CharacterKind::Enemy, [100.0, 50.0]);
        assert_eq!(enemy.hitbox(), BoundingBox::new(100.0, 50.0, 40.0, 40.0));
        assert_eq!(enemy.vertical_state(), VerticalState::Falling);
        assert!(!enemy.is_player());

        enemy.body.hitbox_offset = [5.0, 10.0];
        assert_eq!(enemy.hitbox(), BoundingBox::new(105.0, 60.0, 40.0, 40.0));

        enemy.place_hitbox(&BoundingBox::new(205.0, 10.0, 40.0, 40.0));
        assert_eq!(enemy.position(), [200.0, 0.0]);

        enemy.translate(-50.0, 25.0);
        assert_eq!(enemy.position(), [150.0, 25.0]);
    }

    // Tests damage routed through the trait defaults
    #[test]
    fn test_character_damage_through_trait() {
        let mut player = Character::new(CharacterKind::Player, [0.0, 0.0]);

        player.take_damage(25);

        assert!(player.is_player());
        assert_eq!(player.hp(), MAX_HP - 25);
        assert!(player.is_alive());
    }
}
