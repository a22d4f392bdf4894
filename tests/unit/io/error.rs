//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use ledgewalk::LevelError;
    use ledgewalk::io::error::{file_system, invalid_parameter};
    use std::error::Error;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = file_system("/tmp/level/map.txt", "read map", io_error);

        assert!(error.source().is_some());
        let message = error.to_string();
        assert!(message.contains("read map"));
        assert!(message.contains("/tmp/level/map.txt"));
    }

    // Tests that level errors locate the offending row and column
    #[test]
    fn test_level_error_messages() {
        let malformed = LevelError::MalformedLevel {
            row: 3,
            expected: 10,
            found: 9,
        };
        assert_eq!(
            malformed.to_string(),
            "Malformed level: row 3 has 9 tiles, expected 10"
        );

        let unknown = LevelError::UnknownTileIndex {
            index: 'q',
            row: 1,
            column: 4,
        };
        let message = unknown.to_string();
        assert!(message.contains("'q'"));
        assert!(message.contains("row 1, column 4"));
    }

    // Tests InvalidParameter construction through the helper
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_helper() {
        let error = invalid_parameter("tile_size", &-1.5, &"must be positive");

        assert!(matches!(
            &error,
            LevelError::InvalidParameter { parameter: "tile_size", value, .. } if value == "-1.5"
        ));
        let message = error.to_string();
        assert!(message.contains("tile_size"));
        assert!(message.contains("-1.5"));
        assert!(message.contains("must be positive"));
        assert!(error.source().is_none());
    }

    // Tests movement errors report the rejected values
    #[test]
    fn test_movement_error_messages() {
        let displacement = LevelError::InvalidDisplacement {
            dx: f32::NAN,
            dy: 2.0,
        };
        assert!(displacement.to_string().contains("NaN"));

        let hitbox = LevelError::InvalidHitbox {
            x: 1.0,
            y: 2.0,
            w: 0.0,
            h: 4.0,
        };
        assert_eq!(hitbox.to_string(), "Invalid hitbox [1, 2, 0, 4]");
    }
}
