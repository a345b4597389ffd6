//! Command-line interface for placing cliff routes from a catalog file

use crate::algorithm::search::{
    CliffSearch, SearchConfig, SearchOutcome, SearchReport, SearchRequest,
};
use crate::algorithm::variants::{ResolvedPlacement, VariantSelector};
use crate::catalog::cliff_type::{CliffCatalog, CliffType};
use crate::catalog::connection::CliffSide;
use crate::catalog::tile::CliffTile;
use crate::io::configuration::{
    DEFAULT_ACCEPTANCE_RADIUS, DEFAULT_MAX_EXPANSIONS, DEFAULT_SEED, DEFAULT_THEATER,
    MAX_PREVIEW_EDGE_CELLS, PREVIEW_SUFFIX, PROGRESS_UPDATE_INTERVAL,
};
use crate::io::error::{CliffError, Result, computation_error, invalid_parameter};
use crate::io::image::export_route_as_png;
use crate::io::progress::{ProgressManager, RouteTracker};
use crate::spatial::point::CellPoint;
use clap::{ArgAction, Parser, ValueEnum};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

/// A start and end cell given as `X,Y:X,Y`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Route {
    /// Cell the cliff starts from
    pub start: CellPoint,
    /// Cell the cliff should reach
    pub end: CellPoint,
}

impl FromStr for Route {
    type Err = CliffError;

    fn from_str(s: &str) -> Result<Self> {
        let (start, end) = s
            .split_once(':')
            .ok_or_else(|| invalid_parameter("route", &s, &"expected 'X,Y:X,Y'"))?;
        Ok(Self {
            start: start.parse()?,
            end: end.parse()?,
        })
    }
}

/// Cliff side as given on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SideArg {
    /// Upper edge of the cliff
    Front,
    /// Lower edge of the cliff
    Back,
}

impl From<SideArg> for CliffSide {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::Front => Self::Front,
            SideArg::Back => Self::Back,
        }
    }
}

#[derive(Parser)]
#[command(name = "cliffpath")]
#[command(
    author,
    version,
    about = "Connect map cells with chains of cliff tiles"
)]
/// Command-line arguments for the cliff placement tool
pub struct Cli {
    /// Cliff catalog INI file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Name of the cliff type to place
    #[arg(short, long)]
    pub cliff_type: String,

    /// Route to connect, repeat for several routes searched concurrently
    #[arg(
        short,
        long = "route",
        value_name = "X,Y:X,Y",
        required = true,
        allow_hyphen_values = true
    )]
    pub routes: Vec<Route>,

    /// Theater of the map being edited
    #[arg(short, long, default_value = DEFAULT_THEATER)]
    pub theater: String,

    /// Cliff side the chain starts on
    #[arg(long, value_enum, default_value_t = SideArg::Front)]
    pub side: SideArg,

    /// Cliff side the chain must end on
    #[arg(long, value_enum)]
    pub end_side: Option<SideArg>,

    /// Node expansions allowed per route
    #[arg(short, long, default_value_t = DEFAULT_MAX_EXPANSIONS)]
    pub max_expansions: usize,

    /// Wall-clock allowance per route in milliseconds
    #[arg(long, value_name = "MS")]
    pub time_budget_ms: Option<u64>,

    /// Distance from the end cell at which a route counts as connected
    #[arg(long, default_value_t = DEFAULT_ACCEPTANCE_RADIUS)]
    pub radius: f64,

    /// Seed for choosing tile graphics
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Directory to write PNG previews of found routes into
    #[arg(short, long, value_name = "DIR")]
    pub preview: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log detail, repeatable
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Search limits from the arguments
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error for a negative or non-finite radius
    /// or a zero expansion budget
    pub fn search_config(&self) -> Result<SearchConfig> {
        if !self.radius.is_finite() || self.radius < 0.0 {
            return Err(invalid_parameter(
                "radius",
                &self.radius,
                &"must be a non-negative number",
            ));
        }
        if self.max_expansions == 0 {
            return Err(invalid_parameter(
                "max-expansions",
                &self.max_expansions,
                &"must be at least 1",
            ));
        }

        Ok(SearchConfig {
            acceptance_radius: self.radius,
            max_expansions: self.max_expansions,
            time_budget: self.time_budget_ms.map(Duration::from_millis),
        })
    }

    /// Search request for one route
    pub fn request_for(&self, route: Route) -> SearchRequest {
        SearchRequest {
            start: route.start,
            destination: route.end,
            starting_side: self.side.into(),
            destination_side: self.end_side.map(CliffSide::from),
        }
    }
}

/// Result of one route as reported to the user
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteResult {
    /// Requested route
    pub route: Route,
    /// Placements with graphics chosen, `None` when no path was found
    pub placements: Option<Vec<ResolvedPlacement>>,
    /// Expansions the search performed
    pub expansions: usize,
}

/// Runs every requested route against the chosen cliff type
pub struct CliffRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl CliffRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Load the catalog, search every route and print the placements
    ///
    /// Routes without a path are reported and place nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded, the cliff type is
    /// unknown or not allowed in the theater, the arguments are invalid, or a
    /// preview cannot be written. Routes too large to preview are skipped with
    /// a warning.
    pub fn process(&mut self) -> Result<Vec<RouteResult>> {
        let catalog = CliffCatalog::load(&self.cli.config)?;
        let cliff_type = catalog.get(&self.cli.cliff_type)?;
        if !cliff_type.allows_theater(&self.cli.theater) {
            return Err(CliffError::TheaterMismatch {
                cliff_type: cliff_type.name().to_string(),
                theater: self.cli.theater.clone(),
            });
        }
        let config = self.cli.search_config()?;

        tracing::info!(
            cliff_type = cliff_type.name(),
            routes = self.cli.routes.len(),
            "searching cliff routes"
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.routes.len(), config.max_expansions);
        }

        let reports = self.search_routes(cliff_type.tiles(), config)?;

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        let mut selector = VariantSelector::new(self.cli.seed);
        let mut results = Vec::with_capacity(reports.len());

        for (index, (route, report)) in self.cli.routes.iter().zip(&reports).enumerate() {
            let placements = report.outcome.path().map(|path| selector.resolve(path));

            if let (Some(dir), Some(path)) = (&self.cli.preview, report.outcome.path()) {
                let preview_path = Self::preview_path(dir, cliff_type, index);
                if !export_route_as_png(path, route.start, route.end, &preview_path)? {
                    tracing::warn!(
                        route = index,
                        max_edge = MAX_PREVIEW_EDGE_CELLS,
                        "route too large to preview, skipped"
                    );
                }
            }

            if placements.is_none() {
                tracing::warn!(
                    route = index,
                    outcome = %summarize(&report.outcome),
                    "no cliff placed"
                );
            }

            let result = RouteResult {
                route: *route,
                placements,
                expansions: report.expansions,
            };
            Self::print_result(index, &result);
            results.push(result);
        }

        Ok(results)
    }

    fn search_routes<'a>(
        &self,
        tiles: &'a [CliffTile],
        config: SearchConfig,
    ) -> Result<Vec<SearchReport<'a>>> {
        let jobs: Vec<(SearchRequest, RouteTracker)> = self
            .cli
            .routes
            .iter()
            .enumerate()
            .map(|(index, route)| {
                let tracker = self
                    .progress_manager
                    .as_ref()
                    .map_or_else(RouteTracker::silent, |pm| pm.tracker(index));
                (self.cli.request_for(*route), tracker)
            })
            .collect();

        std::thread::scope(|scope| {
            let handles: Vec<_> = jobs
                .into_iter()
                .map(|(request, tracker)| {
                    scope.spawn(move || run_route(request, tiles, config, &tracker))
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| {
                    handle.join().map_err(|_panic| {
                        computation_error("route search", &"search thread panicked")
                    })
                })
                .collect()
        })
    }

    // Allow print for the placements this tool exists to produce
    #[allow(clippy::print_stdout)]
    fn print_result(index: usize, result: &RouteResult) {
        print!("{}", format_route_result(index, result));
    }

    /// Location of the preview image for one route
    pub fn preview_path(dir: &Path, cliff_type: &CliffType, index: usize) -> PathBuf {
        let stem: String = cliff_type
            .name()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        dir.join(format!("{stem}_{index}{PREVIEW_SUFFIX}.png"))
    }
}

/// Run one search to completion, reporting progress along the way
pub fn run_route<'a>(
    request: SearchRequest,
    tiles: &'a [CliffTile],
    config: SearchConfig,
    tracker: &RouteTracker,
) -> SearchReport<'a> {
    let mut search = CliffSearch::new(request, tiles, config);
    while search.step().is_running() {
        if search.expansions() % PROGRESS_UPDATE_INTERVAL == 0 {
            tracker.update(search.expansions());
        }
    }

    let report = search.finish();
    tracker.complete(report.expansions, &summarize(&report.outcome));
    report
}

/// One-line description of a search outcome
pub fn summarize(outcome: &SearchOutcome<'_>) -> String {
    match outcome {
        SearchOutcome::Found(path) => format!("found {} tiles", path.len()),
        SearchOutcome::Exhausted => "no path".to_string(),
        SearchOutcome::BudgetExceeded { expansions } => {
            format!("gave up after {expansions} expansions")
        }
        SearchOutcome::Cancelled => "cancelled".to_string(),
    }
}

/// Text block printed for one route
pub fn format_route_result(index: usize, result: &RouteResult) -> String {
    let mut text = format!(
        "route {index} ({} -> {}): ",
        result.route.start, result.route.end
    );
    match &result.placements {
        Some(placements) => {
            let _ = writeln!(
                text,
                "{} tiles in {} expansions",
                placements.len(),
                result.expansions
            );
            for placement in placements {
                let _ = writeln!(
                    text,
                    "  {} #{} at {}",
                    placement.tile_set, placement.tile_index, placement.location
                );
            }
        }
        None => {
            let _ = writeln!(text, "no path after {} expansions", result.expansions);
        }
    }
    text
}
