//! Best-first search for a connecting chain of cliff tiles
//!
//! The open set is ordered by f-score with ties going to the node generated
//! first, which keeps runs reproducible. Nodes whose placement, tile and exit
//! were already expanded are skipped. The search stops when a node ends within
//! the acceptance radius of the destination, when nothing is left to expand,
//! or when the caller's budget runs out.

use crate::algorithm::expansion::expand_catalog;
use crate::algorithm::node::{NodeArena, NodeId, NodeKey, SearchNode};
use crate::catalog::connection::CliffSide;
use crate::catalog::tile::CliffTile;
use crate::io::configuration::{DEFAULT_ACCEPTANCE_RADIUS, DEFAULT_MAX_EXPANSIONS};
use crate::spatial::point::CellPoint;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::time::{Duration, Instant};

/// Limits and tolerances for one search
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchConfig {
    /// Distance from the destination at which a chain counts as arrived
    pub acceptance_radius: f64,
    /// Expansions allowed before giving up
    pub max_expansions: usize,
    /// Wall-clock allowance, unlimited when `None`
    pub time_budget: Option<Duration>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            acceptance_radius: DEFAULT_ACCEPTANCE_RADIUS,
            max_expansions: DEFAULT_MAX_EXPANSIONS,
            time_budget: None,
        }
    }
}

/// Where a cliff should start and end
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchRequest {
    /// Cell the first tile connects to
    pub start: CellPoint,
    /// Cell the last exit should reach
    pub destination: CellPoint,
    /// Side of the cliff the chain starts on
    pub starting_side: CliffSide,
    /// Side the final exit must have, any when `None`
    pub destination_side: Option<CliffSide>,
}

impl SearchRequest {
    /// Request without a destination side constraint
    pub const fn new(start: CellPoint, destination: CellPoint, starting_side: CliffSide) -> Self {
        Self {
            start,
            destination,
            starting_side,
            destination_side: None,
        }
    }

    /// Require the final exit to be on `side`
    #[must_use]
    pub const fn with_destination_side(mut self, side: CliffSide) -> Self {
        self.destination_side = Some(side);
        self
    }
}

/// One tile of a found chain
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathStep<'a> {
    /// Tile to place
    pub tile: &'a CliffTile,
    /// Placement origin of the tile
    pub location: CellPoint,
}

/// Progress of a search
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchState {
    /// More steps are needed
    Running,
    /// A chain reached the destination
    Found,
    /// Every reachable placement was expanded without success
    Exhausted,
    /// Expansion count or time budget ran out
    BudgetExceeded,
    /// The caller raised the cancellation flag
    Cancelled,
}

impl SearchState {
    /// Test whether the search can still make progress
    pub const fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }
}

/// Final result of a search
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome<'a> {
    /// Tiles to place, in order from the start
    Found(Vec<PathStep<'a>>),
    /// No chain exists from the start under the tile rules
    Exhausted,
    /// Search stopped after this many expansions without an answer
    BudgetExceeded {
        /// Expansions performed
        expansions: usize,
    },
    /// The caller abandoned the search
    Cancelled,
}

impl<'a> SearchOutcome<'a> {
    /// Placements of a found chain
    pub fn path(&self) -> Option<&[PathStep<'a>]> {
        match self {
            Self::Found(steps) => Some(steps.as_slice()),
            _ => None,
        }
    }

    /// Test whether a chain was found
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// Outcome together with search statistics
#[derive(Clone, Debug)]
pub struct SearchReport<'a> {
    /// What the search concluded
    pub outcome: SearchOutcome<'a>,
    /// Nodes expanded
    pub expansions: usize,
    /// Nodes created, including the start node
    pub generated: usize,
    /// Wall-clock time spent
    pub elapsed: Duration,
}

/// Min-heap entry: lowest f-score first, then earliest generated
#[derive(Clone, Copy, Debug)]
struct OpenEntry {
    f_score: f64,
    sequence: u64,
    node: NodeId,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for BinaryHeap's max-first order
        other
            .f_score
            .total_cmp(&self.f_score)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OpenEntry {}

/// Steppable best-first cliff search
///
/// Owns its node arena and open and closed sets exclusively, so independent
/// searches over the same tiles can run on separate threads.
pub struct CliffSearch<'a> {
    tiles: &'a [CliffTile],
    config: SearchConfig,
    request: SearchRequest,
    arena: NodeArena<'a>,
    open: BinaryHeap<OpenEntry>,
    closed: HashSet<NodeKey>,
    sequence: u64,
    expansions: usize,
    state: SearchState,
    found: Option<NodeId>,
    cancel: Option<&'a AtomicBool>,
    started: Instant,
}

impl<'a> CliffSearch<'a> {
    /// Seed a search with its start node
    pub fn new(request: SearchRequest, tiles: &'a [CliffTile], config: SearchConfig) -> Self {
        let mut search = Self {
            tiles,
            config,
            request,
            arena: NodeArena::new(),
            open: BinaryHeap::new(),
            closed: HashSet::new(),
            sequence: 0,
            expansions: 0,
            state: SearchState::Running,
            found: None,
            cancel: None,
            started: Instant::now(),
        };

        let start = SearchNode::start(
            request.start,
            request.destination,
            request.starting_side,
        );
        search.push_open(start);
        search
    }

    /// Abandon the search once `flag` is set
    #[must_use]
    pub fn with_cancellation(mut self, flag: &'a AtomicBool) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Current state
    pub const fn state(&self) -> SearchState {
        self.state
    }

    /// Nodes expanded so far
    pub const fn expansions(&self) -> usize {
        self.expansions
    }

    /// Nodes waiting in the open set
    pub fn open_len(&self) -> usize {
        self.open.len()
    }

    /// Nodes created so far
    pub const fn generated(&self) -> usize {
        self.arena.len()
    }

    /// Advance by one open-set pop
    ///
    /// Budget and cancellation are checked before each pop; once the search
    /// has left [`SearchState::Running`] further calls change nothing.
    pub fn step(&mut self) -> SearchState {
        if !self.state.is_running() {
            return self.state;
        }

        if self.cancel.is_some_and(|flag| flag.load(AtomicOrdering::Relaxed)) {
            self.state = SearchState::Cancelled;
            return self.state;
        }

        if self.budget_spent() {
            self.state = SearchState::BudgetExceeded;
            return self.state;
        }

        let Some(entry) = self.open.pop() else {
            self.state = SearchState::Exhausted;
            return self.state;
        };

        let Some(current) = self.arena.get(entry.node) else {
            return self.state;
        };

        if !self.closed.insert(current.key()) {
            return self.state;
        }

        if current.reaches_destination(self.config.acceptance_radius, self.request.destination_side)
        {
            self.found = Some(entry.node);
            self.state = SearchState::Found;
            return self.state;
        }

        let successors = expand_catalog(entry.node, current, self.tiles);
        self.expansions += 1;

        tracing::trace!(
            node = entry.node.index(),
            f = entry.f_score,
            successors = successors.len(),
            "expanded node"
        );

        for successor in successors {
            if !self.closed.contains(&successor.key()) {
                self.push_open(successor);
            }
        }

        self.state
    }

    /// Step until the search leaves [`SearchState::Running`]
    pub fn run(mut self) -> SearchReport<'a> {
        while self.step().is_running() {}
        self.finish()
    }

    /// Stop and report, walking parent links if a chain was found
    ///
    /// A search stopped while still running reports
    /// [`SearchOutcome::Cancelled`].
    pub fn finish(self) -> SearchReport<'a> {
        let outcome = match self.state {
            SearchState::Found => SearchOutcome::Found(self.reconstruct()),
            SearchState::Exhausted => SearchOutcome::Exhausted,
            SearchState::BudgetExceeded => SearchOutcome::BudgetExceeded {
                expansions: self.expansions,
            },
            SearchState::Running | SearchState::Cancelled => SearchOutcome::Cancelled,
        };

        let elapsed = self.started.elapsed();
        tracing::debug!(
            start = %self.request.start,
            destination = %self.request.destination,
            expansions = self.expansions,
            generated = self.arena.len(),
            state = ?self.state,
            "cliff search finished"
        );

        SearchReport {
            outcome,
            expansions: self.expansions,
            generated: self.arena.len(),
            elapsed,
        }
    }

    fn reconstruct(&self) -> Vec<PathStep<'a>> {
        self.found.map_or_else(Vec::new, |id| {
            self.arena
                .chain(id)
                .into_iter()
                .filter_map(|node| {
                    node.tile().map(|tile| PathStep {
                        tile,
                        location: node.location(),
                    })
                })
                .collect()
        })
    }

    fn budget_spent(&self) -> bool {
        self.expansions >= self.config.max_expansions
            || self
                .config
                .time_budget
                .is_some_and(|budget| self.started.elapsed() >= budget)
    }

    fn push_open(&mut self, node: SearchNode<'a>) {
        let f_score = node.f_score();
        let id = self.arena.push(node);
        self.open.push(OpenEntry {
            f_score,
            sequence: self.sequence,
            node: id,
        });
        self.sequence += 1;
    }
}

/// Run a complete search for a chain of `tiles` from start to destination
pub fn find_path<'a>(
    request: &SearchRequest,
    tiles: &'a [CliffTile],
    config: &SearchConfig,
) -> SearchOutcome<'a> {
    CliffSearch::new(*request, tiles, *config).run().outcome
}
