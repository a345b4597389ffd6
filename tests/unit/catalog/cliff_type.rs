//! Tests for cliff types, theater filtering and catalog loading

#[cfg(test)]
mod tests {
    use cliffpath::CliffError;
    use cliffpath::algorithm::search::{SearchConfig, SearchRequest};
    use cliffpath::catalog::cliff_type::{CliffCatalog, CliffType};
    use cliffpath::catalog::connection::CliffSide;
    use cliffpath::io::ini::IniFile;
    use cliffpath::spatial::point::CellPoint;
    use std::io::Write;

    const CATALOG: &str = "\
[CliffTypes]
0=RockCliffs
1=IceCliffs

[RockCliffs]
Name=Rock Cliffs
AllowedTheaters=TEMPERATE, SNOW

[RockCliffs.0]
TileSet=CliffRock
IndicesInTileSet=0,1
ConnectionPoint0=0,0:01000000:Front
ConnectionPoint1=3,0:00000100:Front
Foundation=0,0|1,0|2,0|3,0

[RockCliffs.1]
TileSet=CliffRock
IndicesInTileSet=2
ConnectionPoint0=0,0:00000001:Front
ConnectionPoint1=0,3:00010000:Front
Foundation=0,0|0,1|0,2|0,3

[IceCliffs]
AllowedTheaters=SNOW

[IceCliffs.0]
TileSet=CliffIce
IndicesInTileSet=0
ConnectionPoint0=0,0:01000000:Back
ConnectionPoint1=3,0:00000100:Back
Foundation=0,0|1,0|2,0|3,0
";

    fn catalog() -> CliffCatalog {
        let ini = IniFile::parse(CATALOG).expect("Failed to parse catalog");
        CliffCatalog::from_ini(&ini).expect("Failed to load catalog")
    }

    // Tests every listed type loads with its tiles in order
    #[test]
    fn test_catalog_from_ini() {
        let catalog = catalog();

        assert_eq!(catalog.cliff_types().len(), 2);
        let rock = catalog.get("Rock Cliffs").expect("Rock cliffs missing");
        assert_eq!(rock.allowed_theaters(), &["TEMPERATE", "SNOW"]);
        assert_eq!(rock.tiles().len(), 2);
        for (index, tile) in rock.tiles().iter().enumerate() {
            assert_eq!(tile.index(), index);
        }

        // Name falls back to the section name
        let ice = catalog.get("IceCliffs").expect("Ice cliffs missing");
        assert_eq!(ice.tiles().len(), 1);
    }

    // Tests lookups ignore case and report unknown names
    #[test]
    fn test_get_by_name() {
        let catalog = catalog();

        assert!(catalog.get("rock cliffs").is_ok());
        assert!(matches!(
            catalog.get("Sand Cliffs"),
            Err(CliffError::UnknownCliffType { ref name }) if name == "Sand Cliffs"
        ));
    }

    // Tests theater filtering
    // Verified by making theater comparison case-sensitive
    #[test]
    fn test_theater_filtering() {
        let catalog = catalog();

        let temperate: Vec<&str> = catalog
            .for_theater("temperate")
            .map(CliffType::name)
            .collect();
        assert_eq!(temperate, vec!["Rock Cliffs"]);

        let snow: Vec<&str> = catalog.for_theater("SNOW").map(CliffType::name).collect();
        assert_eq!(snow, vec!["Rock Cliffs", "IceCliffs"]);

        assert_eq!(catalog.for_theater("DESERT").count(), 0);
    }

    // Tests searching in a theater the type does not allow
    #[test]
    fn test_find_path_theater_mismatch() {
        let catalog = catalog();
        let ice = catalog.get("IceCliffs").expect("Ice cliffs missing");
        let request = SearchRequest::new(CellPoint::new(0, 0), CellPoint::new(4, 0), CliffSide::Back);

        let result = ice.find_path("TEMPERATE", &request, &SearchConfig::default());
        assert!(matches!(
            result,
            Err(CliffError::TheaterMismatch { ref theater, .. }) if theater == "TEMPERATE"
        ));
    }

    // Tests searching through a cliff type in an allowed theater
    #[test]
    fn test_find_path_in_allowed_theater() {
        let catalog = catalog();
        let rock = catalog.get("Rock Cliffs").expect("Rock cliffs missing");
        let request =
            SearchRequest::new(CellPoint::new(0, 0), CellPoint::new(8, 0), CliffSide::Front);

        let outcome = rock
            .find_path("TEMPERATE", &request, &SearchConfig::default())
            .expect("Theater should be allowed");
        let path = outcome.path().expect("Expected a path");
        let locations: Vec<CellPoint> = path.iter().map(|step| step.location).collect();
        assert_eq!(locations, vec![CellPoint::new(1, 0), CellPoint::new(5, 0)]);
    }

    // Tests a type without tile sections is a configuration error
    #[test]
    fn test_type_without_tiles() {
        let ini = IniFile::parse("[CliffTypes]\n0=Empty\n[Empty]\nAllowedTheaters=SNOW\n")
            .expect("Failed to parse INI");

        assert!(matches!(
            CliffCatalog::from_ini(&ini),
            Err(CliffError::Config { field: "Tiles", .. })
        ));
    }

    // Tests missing sections and theaters are reported
    #[test]
    fn test_missing_records() {
        let no_listing = IniFile::parse("[Other]\nA=1\n").expect("Failed to parse INI");
        assert!(matches!(
            CliffCatalog::from_ini(&no_listing),
            Err(CliffError::MissingSection { ref section }) if section == "CliffTypes"
        ));

        let dangling = IniFile::parse("[CliffTypes]\n0=Ghost\n").expect("Failed to parse INI");
        assert!(matches!(
            CliffCatalog::from_ini(&dangling),
            Err(CliffError::MissingSection { ref section }) if section == "Ghost"
        ));

        assert!(matches!(
            CliffType::new("Bare", Vec::new(), Vec::new()),
            Err(CliffError::Config {
                field: "AllowedTheaters",
                ..
            })
        ));
    }

    // Tests loading a catalog from disk
    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(CATALOG.as_bytes())
            .expect("Failed to write catalog");

        let catalog = CliffCatalog::load(file.path()).expect("Failed to load catalog");
        assert_eq!(catalog.cliff_types().len(), 2);

        let missing = CliffCatalog::load(&file.path().with_extension("missing"));
        assert!(matches!(missing, Err(CliffError::FileSystem { .. })));
    }
}
