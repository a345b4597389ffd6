//! Tests for successor generation and overlap rejection

#[cfg(test)]
mod tests {
    use cliffpath::algorithm::expansion::{expand, expand_catalog};
    use cliffpath::algorithm::node::{NodeArena, SearchNode};
    use cliffpath::catalog::connection::{CliffConnectionPoint, CliffSide};
    use cliffpath::catalog::tile::CliffTile;
    use cliffpath::io::configuration::MAX_CELL_COORDINATE;
    use cliffpath::spatial::point::CellPoint;

    fn tile(
        index: usize,
        offsets: [CellPoint; 2],
        mask: u8,
        side: CliffSide,
        foundation: &[CellPoint],
    ) -> CliffTile {
        let [first, second] = offsets;
        CliffTile::new(
            "Test",
            index,
            "Cliffs",
            vec![0],
            [
                CliffConnectionPoint::new(0, first, mask, side),
                CliffConnectionPoint::new(1, second, mask, side),
            ],
            foundation.iter().copied().collect(),
        )
        .expect("Failed to build tile")
    }

    fn straight() -> CliffTile {
        let cells: Vec<CellPoint> = (0..4).map(|x| CellPoint::new(x, 0)).collect();
        tile(
            0,
            [CellPoint::new(0, 0), CellPoint::new(4, 0)],
            0x11,
            CliffSide::Front,
            &cells,
        )
    }

    // Tests placements from the start node in connector then direction order
    // Verified by adding the connector offset instead of subtracting it
    #[test]
    fn test_expand_from_start() {
        let straight = straight();
        let mut arena = NodeArena::new();
        let start = SearchNode::start(CellPoint::new(0, 0), CellPoint::new(4, 0), CliffSide::Front);
        let start_id = arena.push(start.clone());

        let successors = expand(start_id, &start, &straight);

        let placements: Vec<(CellPoint, CellPoint)> = successors
            .iter()
            .map(|node| (node.location(), node.exit_coords()))
            .collect();
        assert_eq!(
            placements,
            vec![
                (CellPoint::new(0, -1), CellPoint::new(4, -1)),
                (CellPoint::new(0, 1), CellPoint::new(4, 1)),
                (CellPoint::new(-4, -1), CellPoint::new(-4, -1)),
                (CellPoint::new(-4, 1), CellPoint::new(-4, 1)),
            ]
        );
        for node in &successors {
            assert_eq!(node.parent(), Some(start_id));
        }
    }

    // Tests a placement whose foundation lands on the chain is dropped
    // Verified by checking overlap against the candidate's own cells only
    #[test]
    fn test_overlapping_placement_rejected() {
        let straight = straight();
        let hook = tile(
            1,
            [CellPoint::new(0, 0), CellPoint::new(0, 5)],
            0x11,
            CliffSide::Front,
            &[CellPoint::new(-1, 1), CellPoint::new(-2, 1)],
        );

        let mut arena = NodeArena::new();
        let start =
            SearchNode::start(CellPoint::new(0, 0), CellPoint::new(20, 0), CliffSide::Front);
        let start_id = arena.push(start.clone());
        let parent = expand(start_id, &start, &straight)
            .into_iter()
            .next()
            .expect("Expected a first placement");
        assert_eq!(parent.location(), CellPoint::new(0, -1));
        let parent_id = arena.push(parent.clone());

        let successors = expand(parent_id, &parent, &hook);

        let locations: Vec<CellPoint> = successors.iter().map(SearchNode::location).collect();
        assert_eq!(
            locations,
            vec![
                CellPoint::new(4, 0),
                CellPoint::new(4, -7),
                CellPoint::new(4, -5),
            ]
        );
        for node in &successors {
            assert_eq!(node.occupied_cells().len(), 6);
        }
    }

    // Tests placements past the coordinate bound are skipped
    // Verified by dropping the bound check on the placement origin
    #[test]
    fn test_out_of_bounds_placements_skipped() {
        let straight = straight();
        let corner = CellPoint::new(MAX_CELL_COORDINATE, MAX_CELL_COORDINATE);
        let mut arena = NodeArena::new();
        let start = SearchNode::start(corner, CellPoint::new(0, 0), CliffSide::Front);
        let start_id = arena.push(start.clone());

        let locations: Vec<CellPoint> = expand(start_id, &start, &straight)
            .iter()
            .map(SearchNode::location)
            .collect();

        assert_eq!(
            locations,
            vec![
                CellPoint::new(MAX_CELL_COORDINATE, MAX_CELL_COORDINATE - 1),
                CellPoint::new(MAX_CELL_COORDINATE - 4, MAX_CELL_COORDINATE - 1),
            ]
        );
    }

    // Tests a start at the i32 limits expands to nothing instead of overflowing
    #[test]
    fn test_expand_at_integer_limits() {
        let cells: Vec<CellPoint> = (0..4).map(|x| CellPoint::new(x, 0)).collect();
        let horizontal = tile(
            0,
            [CellPoint::new(0, 0), CellPoint::new(4, 0)],
            0x44,
            CliffSide::Front,
            &cells,
        );
        let mut arena = NodeArena::new();

        for corner in [
            CellPoint::new(i32::MAX, i32::MAX),
            CellPoint::new(i32::MIN, i32::MIN),
        ] {
            let start = SearchNode::start(corner, CellPoint::new(0, 0), CliffSide::Front);
            let start_id = arena.push(start.clone());
            assert!(expand(start_id, &start, &horizontal).is_empty());
        }
    }

    // Tests connectors on the other cliff side produce nothing
    #[test]
    fn test_side_mismatch_yields_nothing() {
        let cells: Vec<CellPoint> = (0..4).map(|x| CellPoint::new(x, 0)).collect();
        let back = tile(
            0,
            [CellPoint::new(0, 0), CellPoint::new(4, 0)],
            0x11,
            CliffSide::Back,
            &cells,
        );
        let mut arena = NodeArena::new();
        let start = SearchNode::start(CellPoint::new(0, 0), CellPoint::new(4, 0), CliffSide::Front);
        let start_id = arena.push(start.clone());

        assert!(expand(start_id, &start, &back).is_empty());
    }

    // Tests catalog expansion concatenates per-tile results in catalog order
    #[test]
    fn test_expand_catalog_order() {
        let cells: Vec<CellPoint> = (0..4).map(|x| CellPoint::new(x, 0)).collect();
        let tiles = vec![
            straight(),
            tile(
                1,
                [CellPoint::new(0, 0), CellPoint::new(4, 0)],
                0x11,
                CliffSide::Back,
                &cells,
            ),
            tile(
                2,
                [CellPoint::new(0, 0), CellPoint::new(4, 0)],
                0x11,
                CliffSide::Front,
                &cells,
            ),
        ];
        let mut arena = NodeArena::new();
        let start = SearchNode::start(CellPoint::new(0, 0), CellPoint::new(4, 0), CliffSide::Front);
        let start_id = arena.push(start.clone());

        let successors = expand_catalog(start_id, &start, &tiles);

        let tile_order: Vec<Option<usize>> =
            successors.iter().map(|node| node.key().tile).collect();
        assert_eq!(
            tile_order,
            vec![Some(0), Some(0), Some(0), Some(0), Some(2), Some(2), Some(2), Some(2)]
        );
    }
}
