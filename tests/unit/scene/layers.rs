//! Tests for enum-keyed draw layers

#[cfg(test)]
mod tests {

    use ledgewalk::scene::layers::{LayerStack, RenderLayer};

    // Tests that iteration runs back to front regardless of insertion order
    #[test]
    fn test_draw_order() {
        let mut stack = LayerStack::default();
        stack.add(RenderLayer::Gui, "hud");
        stack.add(RenderLayer::Player, "player");
        stack.add(RenderLayer::Background, "sky");
        stack.add(RenderLayer::Mobs, "slime");
        stack.add(RenderLayer::Mobs, "bat");

        let order: Vec<&str> = stack.iter_in_draw_order().map(|(_, item)| *item).collect();

        assert_eq!(order, vec!["sky", "slime", "bat", "player", "hud"]);
        assert_eq!(stack.len(), 5);
    }

    // Tests removal of the first matching item from one layer only
    // Verified by removing from every layer
    #[test]
    fn test_remove_from_layer() {
        let mut stack = LayerStack::default();
        stack.add(RenderLayer::Mobs, 1);
        stack.add(RenderLayer::Mobs, 2);
        stack.add(RenderLayer::Mobs, 1);
        stack.add(RenderLayer::Player, 1);

        assert!(stack.remove(RenderLayer::Mobs, &1));
        assert_eq!(stack.get(RenderLayer::Mobs), &[2, 1]);
        assert_eq!(stack.get(RenderLayer::Player), &[1]);
        assert!(!stack.remove(RenderLayer::Gui, &1));
    }

    // Tests clearing and emptiness
    #[test]
    fn test_clear() {
        let mut stack = LayerStack::default();
        assert!(stack.is_empty());

        stack.add(RenderLayer::Map, 'x');
        assert!(!stack.is_empty());

        stack.clear();
        assert!(stack.is_empty());
        assert!(stack.get(RenderLayer::Map).is_empty());
    }

    // Tests that layer slots follow the declaration order
    #[test]
    fn test_layer_indices() {
        let indices: Vec<usize> = RenderLayer::ALL.iter().map(|layer| layer.index()).collect();

        assert_eq!(indices, (0..RenderLayer::COUNT).collect::<Vec<_>>());
        assert!(RenderLayer::Background < RenderLayer::Gui);
    }
}
