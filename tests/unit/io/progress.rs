//! Tests for per-level progress tracking and batch mode

#[cfg(test)]
mod tests {
    use ledgewalk::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
    use ledgewalk::io::progress::ProgressManager;
    use std::path::Path;

    fn run_levels(pm: &mut ProgressManager, count: usize, ticks: usize) {
        for index in 0..count {
            pm.start_level(index, Path::new(&format!("levels/level{index}")), ticks);
            for tick in (0..=ticks).step_by(10) {
                pm.update_tick(index, tick);
            }
            pm.complete_level(index);
        }
        pm.finish();
    }

    // Tests one bar per level for small batches
    // Verified by creating one less progress bar
    #[test]
    fn test_individual_bars_under_limit() {
        let mut pm = ProgressManager::new();
        let level_count = MAX_INDIVIDUAL_PROGRESS_BARS - 1;

        pm.initialize(level_count);

        assert_eq!(pm.visible_bar_count(), level_count);
        assert!(!pm.is_batched());
        run_levels(&mut pm, level_count, 50);
    }

    // Tests batch mode with a rolling window of level bars
    // Verified by skipping the batch bar for large batches
    #[test]
    fn test_batch_mode_over_limit() {
        let mut pm = ProgressManager::default();
        let level_count = MAX_INDIVIDUAL_PROGRESS_BARS * 3;

        pm.initialize(level_count);

        assert_eq!(pm.visible_bar_count(), MAX_INDIVIDUAL_PROGRESS_BARS);
        assert!(pm.is_batched());
        run_levels(&mut pm, level_count, 20);
    }

    // Tests that updates for unknown levels are ignored
    #[test]
    fn test_out_of_order_updates() {
        let mut pm = ProgressManager::new();
        pm.initialize(0);
        assert_eq!(pm.visible_bar_count(), 0);

        pm.update_tick(3, 10);
        pm.complete_level(7);
        pm.start_level(2, Path::new("late"), 5);
        pm.finish();
    }
}
