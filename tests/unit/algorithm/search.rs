//! Tests for the steppable search driver, its budgets and its outcomes

#[cfg(test)]
mod tests {
    use cliffpath::algorithm::search::{
        CliffSearch, SearchConfig, SearchOutcome, SearchRequest, SearchState, find_path,
    };
    use cliffpath::catalog::connection::{CliffConnectionPoint, CliffSide};
    use cliffpath::catalog::tile::CliffTile;
    use cliffpath::io::configuration::{DEFAULT_ACCEPTANCE_RADIUS, DEFAULT_MAX_EXPANSIONS};
    use cliffpath::spatial::point::CellPoint;
    use std::sync::atomic::AtomicBool;
    use std::time::Duration;

    fn straight_tiles() -> Vec<CliffTile> {
        vec![
            CliffTile::new(
                "Straight.0",
                0,
                "Cliffs",
                vec![0],
                [
                    CliffConnectionPoint::new(0, CellPoint::new(0, 0), 0x11, CliffSide::Front),
                    CliffConnectionPoint::new(1, CellPoint::new(4, 0), 0x11, CliffSide::Front),
                ],
                (0..4).map(|x| CellPoint::new(x, 0)).collect(),
            )
            .expect("Failed to build tile"),
        ]
    }

    fn request(destination: CellPoint) -> SearchRequest {
        SearchRequest::new(CellPoint::new(0, 0), destination, CliffSide::Front)
    }

    // Tests default limits
    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();

        assert!((config.acceptance_radius - DEFAULT_ACCEPTANCE_RADIUS).abs() < f64::EPSILON);
        assert_eq!(config.max_expansions, DEFAULT_MAX_EXPANSIONS);
        assert!(config.time_budget.is_none());
    }

    // Tests the request builder sets only the destination side
    #[test]
    fn test_request_builder() {
        let plain = request(CellPoint::new(4, 0));
        assert_eq!(plain.destination_side, None);

        let sided = plain.with_destination_side(CliffSide::Back);
        assert_eq!(sided.destination_side, Some(CliffSide::Back));
        assert_eq!(sided.start, plain.start);
        assert_eq!(sided.starting_side, CliffSide::Front);
    }

    // Tests stepping expands the start node then accepts the first placement
    // Verified by running the goal test after expansion instead of before
    #[test]
    fn test_step_sequence() {
        let tiles = straight_tiles();
        let mut search = CliffSearch::new(
            request(CellPoint::new(4, 0)),
            &tiles,
            SearchConfig::default(),
        );

        assert_eq!(search.generated(), 1);
        assert_eq!(search.open_len(), 1);

        assert_eq!(search.step(), SearchState::Running);
        assert_eq!(search.expansions(), 1);
        assert_eq!(search.generated(), 5);
        assert_eq!(search.open_len(), 4);

        assert_eq!(search.step(), SearchState::Found);
        assert_eq!(search.expansions(), 1);

        // Further steps change nothing
        assert_eq!(search.step(), SearchState::Found);
        assert_eq!(search.state(), SearchState::Found);

        let report = search.finish();
        assert_eq!(report.expansions, 1);
        assert_eq!(report.generated, 5);
        let path = report.outcome.path().expect("Expected a path");
        assert_eq!(path.len(), 1);
        assert_eq!(path.first().map(|step| step.location), Some(CellPoint::new(0, -1)));
    }

    // Tests the expansion budget stops an unbounded search
    #[test]
    fn test_expansion_budget() {
        let tiles = straight_tiles();
        let config = SearchConfig {
            max_expansions: 25,
            ..SearchConfig::default()
        };

        let outcome = find_path(&request(CellPoint::new(2, 0)), &tiles, &config);
        assert_eq!(outcome, SearchOutcome::BudgetExceeded { expansions: 25 });
        assert!(!outcome.is_found());
        assert!(outcome.path().is_none());
    }

    // Tests a zero time budget stops before any expansion
    #[test]
    fn test_time_budget() {
        let tiles = straight_tiles();
        let config = SearchConfig {
            time_budget: Some(Duration::ZERO),
            ..SearchConfig::default()
        };

        let report = CliffSearch::new(request(CellPoint::new(2, 0)), &tiles, config).run();
        assert_eq!(report.outcome, SearchOutcome::BudgetExceeded { expansions: 0 });
    }

    // Tests a raised flag cancels before the next pop
    // Verified by checking the flag after the pop
    #[test]
    fn test_cancellation() {
        let tiles = straight_tiles();
        let flag = AtomicBool::new(true);

        let report = CliffSearch::new(request(CellPoint::new(4, 0)), &tiles, SearchConfig::default())
            .with_cancellation(&flag)
            .run();

        assert_eq!(report.outcome, SearchOutcome::Cancelled);
        assert_eq!(report.expansions, 0);
    }

    // Tests finishing a search that is still running reports cancellation
    #[test]
    fn test_finish_while_running() {
        let tiles = straight_tiles();
        let mut search = CliffSearch::new(
            request(CellPoint::new(40, 0)),
            &tiles,
            SearchConfig::default(),
        );
        assert!(search.step().is_running());

        assert_eq!(search.finish().outcome, SearchOutcome::Cancelled);
    }

    // Tests an empty catalog exhausts after expanding the start node
    #[test]
    fn test_empty_catalog_exhausts() {
        let report = CliffSearch::new(request(CellPoint::new(4, 0)), &[], SearchConfig::default())
            .run();

        assert_eq!(report.outcome, SearchOutcome::Exhausted);
        assert_eq!(report.expansions, 1);
    }

    // Tests a start already inside the radius places nothing
    #[test]
    fn test_start_at_destination() {
        let tiles = straight_tiles();
        let outcome = find_path(
            &request(CellPoint::new(1, 0)),
            &tiles,
            &SearchConfig::default(),
        );

        assert_eq!(outcome.path().map(<[_]>::len), Some(0));
    }
}
