//! Tests for the tile catalog: lookup, duplicates and record parsing

#[cfg(test)]
mod tests {

    use ledgewalk::LevelError;
    use ledgewalk::spatial::tiles::{
        CatalogWarning, TileCatalog, TileDefinition, TileProperty, TileRecord,
    };

    fn definition(file_index: char, property: TileProperty) -> TileDefinition {
        TileDefinition {
            name: None,
            file_index,
            tex_coords: [0, 0],
            property,
        }
    }

    fn record(index: &str, property: &str) -> TileRecord {
        TileRecord {
            name: Some(format!("tile {index}")),
            index: index.to_string(),
            tex_coords: [50, 100],
            property: property.to_string(),
        }
    }

    // Tests lookup of properties and file indices through resolved ids
    #[test]
    fn test_resolve_and_lookup() {
        let catalog = crate::catalog();

        let ladder = catalog.resolve('H').unwrap();
        assert_eq!(catalog.property(ladder), TileProperty::Ladder);
        assert_eq!(catalog.file_index(ladder), 'H');
        assert_eq!(catalog.tex_coords(ladder), [100, 0]);
        assert_eq!(catalog.file_index(catalog.default_tile()), '.');
        assert!(catalog.resolve('x').is_none());
        assert_eq!(catalog.len(), 4);
        assert!(catalog.warnings().is_empty());
    }

    // Tests that a catalog without the default marker is rejected
    // Verified by falling back to the first definition as default
    #[test]
    fn test_missing_default_tile_is_fatal() {
        let result = TileCatalog::load([definition('#', TileProperty::Solid)]);

        assert!(matches!(
            result,
            Err(LevelError::MissingDefaultTile { marker: '.' })
        ));
    }

    // Tests that the later of two duplicate definitions wins with a warning
    #[test]
    fn test_duplicate_index_last_wins() {
        let catalog = TileCatalog::load([
            definition('.', TileProperty::Void),
            definition('a', TileProperty::Solid),
            definition('a', TileProperty::Ladder),
        ])
        .unwrap();

        let resolved = catalog.resolve('a').unwrap();
        assert_eq!(resolved.index(), 2);
        assert_eq!(catalog.property(resolved), TileProperty::Ladder);
        assert_eq!(catalog.warnings().len(), 1);
        assert!(matches!(
            catalog.warnings().first(),
            Some(CatalogWarning::DuplicateTileIndex { index: 'a', .. })
        ));
    }

    // Tests that an unknown property string degrades to Void with a warning
    #[test]
    fn test_unknown_property_becomes_void() {
        let catalog =
            TileCatalog::from_records([record(".", "Void"), record("w", "Water")], 32.0).unwrap();

        let water = catalog.resolve('w').unwrap();
        assert_eq!(catalog.property(water), TileProperty::Void);
        assert!((catalog.tile_size() - 32.0).abs() < f32::EPSILON);
        assert!(catalog.warnings().iter().any(|warning| matches!(
            warning,
            CatalogWarning::UnknownTileProperty { index: 'w', value } if value == "Water"
        )));
    }

    // Tests that only the first character of a record index is used
    #[test]
    fn test_record_uses_first_index_character() {
        let catalog =
            TileCatalog::from_records([record(".", "Void"), record("#extra", "Solid")], 50.0)
                .unwrap();

        let solid = catalog.resolve('#').unwrap();
        assert_eq!(catalog.property(solid), TileProperty::Solid);
        assert_eq!(
            catalog.definition(solid).and_then(|d| d.name.clone()),
            Some("tile #extra".to_string())
        );
    }

    // Tests rejection of empty index strings and unusable tile sizes
    #[test]
    fn test_invalid_records_and_tile_size() {
        let empty_index = TileCatalog::from_records([record(".", "Void"), record("", "Solid")], 50.0);
        assert!(matches!(
            empty_index,
            Err(LevelError::MalformedTileRecord { position: 1, .. })
        ));

        for tile_size in [0.0, 1.0, -50.0, f32::NAN] {
            let result = TileCatalog::from_records([record(".", "Void")], tile_size);
            assert!(matches!(
                result,
                Err(LevelError::InvalidParameter {
                    parameter: "tile_size",
                    ..
                })
            ));
        }
    }

    // Tests parsing of property names
    #[test]
    fn test_property_from_str() {
        assert_eq!("Solid".parse::<TileProperty>(), Ok(TileProperty::Solid));
        assert_eq!("Ladder".parse::<TileProperty>(), Ok(TileProperty::Ladder));
        assert_eq!("Void".parse::<TileProperty>(), Ok(TileProperty::Void));
        assert_eq!("solid".parse::<TileProperty>(), Err("solid".to_string()));
    }
}
