//! Tests for tile spans and contact queries with the virtual ground

#[cfg(test)]
mod tests {

    use ledgewalk::physics::collision::{TileSpan, tile_index, touching};
    use ledgewalk::spatial::bounds::BoundingBox;
    use ledgewalk::spatial::tiles::TileProperty;

    use crate::grid;

    const FAR_GROUND: i32 = 200;

    // Tests floor division of world coordinates into tile indices
    #[test]
    fn test_tile_index_floors() {
        assert_eq!(tile_index(0.0, 50.0), 0);
        assert_eq!(tile_index(49.9, 50.0), 0);
        assert_eq!(tile_index(50.0, 50.0), 1);
        assert_eq!(tile_index(-0.5, 50.0), -1);
        assert_eq!(tile_index(-50.0, 50.0), -1);
        assert_eq!(tile_index(f32::MAX, 50.0), i32::MAX);
    }

    // Tests that a box covers the tiles of its first and last world unit
    // Verified by using the right edge instead of the last covered unit
    #[test]
    fn test_span_of_box() {
        let aligned = TileSpan::of_box(&BoundingBox::new(0.0, 10.0, 40.0, 40.0), 50.0);
        assert_eq!(
            aligned,
            TileSpan {
                first_column: 0,
                last_column: 0,
                first_row: 0,
                last_row: 0,
            }
        );

        let straddling = TileSpan::of_box(&BoundingBox::new(30.0, 30.0, 40.0, 40.0), 50.0);
        assert_eq!([straddling.last_column, straddling.last_row], [1, 1]);

        let exact = TileSpan::of_box(&BoundingBox::new(50.0, 0.0, 50.0, 50.0), 50.0);
        assert_eq!([exact.first_column, exact.last_column], [1, 1]);
    }

    // Tests clamping of minimums and the last column, leaving the last row
    #[test]
    fn test_span_clamped() {
        let span = TileSpan::of_box(&BoundingBox::new(-60.0, -60.0, 300.0, 400.0), 50.0);

        let clamped = span.clamped(2);

        assert_eq!(
            clamped,
            TileSpan {
                first_column: 0,
                last_column: 1,
                first_row: 0,
                last_row: 6,
            }
        );
        assert_eq!(clamped.cells().count(), 14);
        assert_eq!(clamped.cells().next(), Some([0, 0]));
    }

    // Tests contact with solid tiles under and beside a box
    #[test]
    fn test_touching_solid() {
        let grid = grid(". . .\n# # #");

        let above = BoundingBox::new(0.0, 0.0, 40.0, 40.0);
        let sunk = BoundingBox::new(0.0, 20.0, 40.0, 40.0);

        assert!(!touching(&grid, &above, TileProperty::Solid, FAR_GROUND));
        assert!(touching(&grid, &sunk, TileProperty::Solid, FAR_GROUND));
        assert!(!touching(&grid, &sunk, TileProperty::Ladder, FAR_GROUND));
    }

    // Tests ladder contact and the grid edge
    #[test]
    fn test_touching_ladder_and_outside_grid() {
        let grid = grid(". H\n. H");

        let on_ladder = BoundingBox::new(30.0, 10.0, 40.0, 40.0);
        let left_of_grid = BoundingBox::new(-100.0, 0.0, 40.0, 40.0);
        let right_of_grid = BoundingBox::new(200.0, 0.0, 40.0, 40.0);

        assert!(touching(&grid, &on_ladder, TileProperty::Ladder, FAR_GROUND));
        assert!(!touching(&grid, &left_of_grid, TileProperty::Ladder, FAR_GROUND));
        assert!(!touching(&grid, &right_of_grid, TileProperty::Ladder, FAR_GROUND));
    }

    // Tests that the virtual ground reports contact for any property
    // Verified by comparing the first row instead of the last row
    #[test]
    fn test_virtual_ground() {
        let grid = grid(".");
        let virtual_ground_row = 5;

        let above = BoundingBox::new(0.0, 200.0, 40.0, 40.0);
        let reaching = BoundingBox::new(0.0, 220.0, 40.0, 40.0);

        assert!(!touching(&grid, &above, TileProperty::Solid, virtual_ground_row));
        assert!(touching(&grid, &reaching, TileProperty::Solid, virtual_ground_row));
        assert!(touching(&grid, &reaching, TileProperty::Ladder, virtual_ground_row));
    }

    // Tests that the virtual ground fires on the box's inclusive last row
    // Verified by using the exclusive bottom edge as the last row
    #[test]
    fn test_virtual_ground_uses_inclusive_bottom() {
        let grid = grid(".");
        let virtual_ground_row = 5;

        let resting_on_boundary = BoundingBox::new(0.0, 210.0, 40.0, 40.0);
        let one_unit_lower = BoundingBox::new(0.0, 211.0, 40.0, 40.0);

        assert!(!touching(&grid, &resting_on_boundary, TileProperty::Solid, virtual_ground_row));
        assert!(touching(&grid, &one_unit_lower, TileProperty::Solid, virtual_ground_row));
    }
}
